use csv_list_directive::{
    CsvListDirective, CsvListOptions, Directive, DirectiveInput, DocumentDir, ExtensionConfig,
};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("csv_list_directive=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args[1].starts_with("--") {
        eprintln!(
            "usage: csv-list-render <file.csv> [--format LABEL] [--title-key KEY] \
             [--id-key KEY] [--id-prefix PREFIX] [--encoding LABEL] [--escape] [--config FILE]"
        );
        std::process::exit(2);
    }

    let mut options = CsvListOptions {
        file: Some(args[1].clone()),
        ..Default::default()
    };
    let mut format = String::from("csv");
    let mut config_path: Option<String> = None;
    let mut escape = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--format" => format = next_value(&args, &mut i)?,
            "--title-key" => options.title_key = next_value(&args, &mut i)?,
            "--id-key" => options.id_key = next_value(&args, &mut i)?,
            "--id-prefix" => options.id_prefix = next_value(&args, &mut i)?,
            "--encoding" => options.encoding = Some(next_value(&args, &mut i)?),
            "--escape" => escape = true,
            "--config" => config_path = Some(next_value(&args, &mut i)?),
            other => anyhow::bail!("unknown argument: {other}"),
        }
        i += 1;
    }

    let mut config = ExtensionConfig::load_or_default(config_path.as_deref());
    if escape {
        config.directive.escape_values = true;
    }

    let resolver = DocumentDir::from_dir(env::current_dir()?);
    let directive = CsvListDirective::new(config.directive.clone(), &resolver);

    let input = DirectiveInput {
        arguments: format,
        options,
        content: Vec::new(),
        location: None,
    };

    let node = directive.run(&input)?;
    tracing::info!(format = %node.format, source = ?node.source, "rendered csv-list");
    println!("{}", node.html);

    Ok(())
}

fn next_value(args: &[String], i: &mut usize) -> anyhow::Result<String> {
    let flag = args[*i].clone();
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}
