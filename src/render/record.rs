use crate::csv_source::{record_map, RecordTable};
use crate::host::Translator;
use crate::render::html::HtmlBuilder;
use crate::utils::escape_html;
use once_cell::sync::Lazy;
use regex::Regex;

// A run of newline characters collapses to one break marker.
static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").unwrap());

pub const PERMALINK_LABEL: &str = "Permalink to this headline";

/// Renders one record list. Values, keys and ids are emitted verbatim unless
/// `escape` is on; the title block always precedes the field blocks.
pub struct RecordRenderer<'a> {
    title_key: Option<&'a str>,
    id_key: Option<&'a str>,
    id_prefix: &'a str,
    escape: bool,
    translator: &'a dyn Translator,
}

impl<'a> RecordRenderer<'a> {
    pub fn new(
        title_key: &'a str,
        id_key: &'a str,
        id_prefix: &'a str,
        escape: bool,
        translator: &'a dyn Translator,
    ) -> Self {
        Self {
            title_key: (!title_key.is_empty()).then_some(title_key),
            id_key: (!id_key.is_empty()).then_some(id_key),
            id_prefix,
            escape,
            translator,
        }
    }

    pub fn render_list(&self, table: &RecordTable) -> String {
        let mut html = HtmlBuilder::new();
        html.open("div", &[("class", "csv-list")]);
        for row in table.rows() {
            self.render_record(&mut html, table.header(), row);
        }
        html.close("div");
        html.finish()
    }

    fn render_record(&self, html: &mut HtmlBuilder, header: &[String], row: &[String]) {
        let record = record_map(header, row);
        let id = self.id_key.and_then(|key| {
            record
                .get(key)
                .map(|value| format!("{}{}", self.id_prefix, self.attr_text(value)))
        });

        match &id {
            Some(id) => html.open("div", &[("class", "csv-list-item"), ("id", id)]),
            None => html.open("div", &[("class", "csv-list-item")]),
        };

        if let Some(title_key) = self.title_key {
            for (key, value) in header.iter().zip(row) {
                if key != title_key {
                    continue;
                }
                self.render_entry(html, "csv-list-title caption", key, value, id.as_deref());
            }
        }

        for (key, value) in header.iter().zip(row) {
            if Some(key.as_str()) == self.title_key {
                continue;
            }
            self.render_entry(html, "csv-list-field", key, value, None);
        }

        html.close("div");
    }

    fn render_entry(
        &self,
        html: &mut HtmlBuilder,
        class: &str,
        key: &str,
        value: &str,
        anchor_id: Option<&str>,
    ) {
        let key = self.attr_text(key);
        let value = self.value_text(value);

        html.open("p", &[("class", class), ("data-csv-list-key", &key)]);
        html.open("span", &[("class", "csv-list-key")])
            .raw(&key)
            .close("span");
        html.open("span", &[("class", "csv-list-value")])
            .raw(&value)
            .close("span");
        if let Some(id) = anchor_id {
            let href = format!("#{id}");
            let label = self.translator.translate(PERMALINK_LABEL);
            html.open(
                "a",
                &[("class", "headerlink"), ("href", &href), ("title", &label)],
            )
            .raw("¶")
            .close("a");
        }
        html.close("p");
    }

    fn attr_text(&self, value: &str) -> String {
        if self.escape {
            escape_html(value)
        } else {
            value.to_string()
        }
    }

    fn value_text(&self, value: &str) -> String {
        let value = self.attr_text(value);
        NEWLINE_RUN.replace_all(&value, "<br>").into_owned()
    }
}
