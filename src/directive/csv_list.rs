use crate::csv_source::{resolve_source, RecordTable};
use crate::host::{NullTranslator, PathResolver, RawNode, Translator};
use crate::render::RecordRenderer;
use crate::utils::{normalize_format, DirectiveDefaults, Result};

use super::{Directive, DirectiveInput};

pub const DIRECTIVE_NAME: &str = "csv-list";

static NULL_TRANSLATOR: NullTranslator = NullTranslator;

/// The `csv-list` directive: resolves the CSV source, parses it into records
/// and renders them as one raw HTML node. Stateless across invocations.
pub struct CsvListDirective<'a> {
    defaults: DirectiveDefaults,
    resolver: &'a dyn PathResolver,
    translator: &'a dyn Translator,
}

impl<'a> CsvListDirective<'a> {
    pub fn new(defaults: DirectiveDefaults, resolver: &'a dyn PathResolver) -> Self {
        Self {
            defaults,
            resolver,
            translator: &NULL_TRANSLATOR,
        }
    }

    pub fn with_translator(mut self, translator: &'a dyn Translator) -> Self {
        self.translator = translator;
        self
    }
}

impl Directive for CsvListDirective<'_> {
    fn name(&self) -> &str {
        DIRECTIVE_NAME
    }

    fn run(&self, input: &DirectiveInput) -> Result<RawNode> {
        let format = normalize_format(&input.arguments);
        let encoding = input
            .options
            .encoding
            .as_deref()
            .unwrap_or(&self.defaults.input_encoding);

        let source = resolve_source(
            DIRECTIVE_NAME,
            &input.content,
            input.options.file.as_deref(),
            encoding,
            self.resolver,
        )?;

        let table = RecordTable::parse(&source.text)?;
        tracing::debug!(
            format = %format,
            records = table.record_count(),
            "rendering csv-list directive"
        );

        let renderer = RecordRenderer::new(
            &input.options.title_key,
            &input.options.id_key,
            &input.options.id_prefix,
            self.defaults.escape_values,
            self.translator,
        );
        let html = renderer.render_list(&table);

        Ok(RawNode {
            html,
            format,
            source: source.source,
            location: input.location.clone(),
        })
    }
}
