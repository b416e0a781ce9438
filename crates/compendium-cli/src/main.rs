//! Compendium CLI
//!
//! Command-line tool for translating demon compendium data files.

use clap::{Parser, Subcommand};
use compendium_core::{LookupTables, Overrides, RecordKind, Translator, Vocabulary};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "compendium")]
#[command(about = "Demon compendium data translator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the languages the data directory can translate into
    Languages {
        /// Directory holding translations.json and the *-names.json tables
        #[arg(short, long)]
        data: PathBuf,
    },

    /// Translate a data file
    Translate {
        /// Directory holding translations.json and the *-names.json tables
        #[arg(short, long)]
        data: PathBuf,

        /// Kind of records in the input (demons, enemies, skills, recipes, ...)
        #[arg(short, long)]
        kind: String,

        /// Target language
        #[arg(short, long)]
        lang: String,

        /// Input JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Override file applied before the vocabulary tables
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Translate single words against one vocabulary
    Word {
        /// Directory holding translations.json and the *-names.json tables
        #[arg(short, long)]
        data: PathBuf,

        /// Vocabulary (demon, enemy, skill, race, elem, item, area)
        #[arg(short, long)]
        vocab: String,

        /// Target language
        #[arg(short, long)]
        lang: String,

        /// Override file applied before the vocabulary tables
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Words to translate
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Translate an application title
    Title {
        #[arg(short, long)]
        data: PathBuf,

        #[arg(short, long)]
        lang: String,

        /// Canonical title
        title: String,
    },

    /// Show the per-language settings key
    SettingsKey {
        #[arg(short, long)]
        data: PathBuf,

        #[arg(short, long)]
        lang: String,

        key: String,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> compendium_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Languages { data } => cmd_languages(&data),
        Commands::Translate {
            data,
            kind,
            lang,
            input,
            overrides,
            output,
        } => cmd_translate(&data, &kind, &lang, &input, overrides.as_deref(), output.as_deref()),
        Commands::Word {
            data,
            vocab,
            lang,
            overrides,
            words,
        } => cmd_word(&data, &vocab, &lang, overrides.as_deref(), &words),
        Commands::Title { data, lang, title } => {
            let translator = load_translator(&data, None)?;
            println!("{}", translator.translate_app_title(&title, &lang));
            Ok(())
        }
        Commands::SettingsKey { data, lang, key } => {
            let translator = load_translator(&data, None)?;
            println!("{}", translator.translate_settings_key(&key, &lang));
            Ok(())
        }
    }
}

fn load_translator(data: &Path, overrides: Option<&Path>) -> compendium_core::Result<Translator> {
    let tables = LookupTables::load_dir(data)?;
    let mut translator = Translator::new(tables);

    if let Some(path) = overrides {
        translator.load_overrides(Overrides::load(path)?);
    }

    Ok(translator)
}

fn cmd_languages(data: &Path) -> compendium_core::Result<()> {
    let tables = LookupTables::load_dir(data)?;

    println!(
        "Canonical language: {}",
        tables.canonical_language().unwrap_or_default()
    );
    println!("Supported languages ({}):", tables.supported_languages().len());
    for (code, lang) in tables.supported_languages().iter().enumerate() {
        println!("  {}. {}", code, lang);
    }

    Ok(())
}

fn cmd_translate(
    data: &Path,
    kind: &str,
    lang: &str,
    input: &Path,
    overrides: Option<&Path>,
    output: Option<&Path>,
) -> compendium_core::Result<()> {
    let kind: RecordKind = kind.parse()?;
    let translator = load_translator(data, overrides)?;

    warn_if_unsupported(&translator, lang);

    let content = fs::read_to_string(input).map_err(|e| compendium_core::Error::FileRead {
        path: input.to_path_buf(),
        source: e,
    })?;
    let translated = translator.translate_json(kind, &content, lang)?;

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", translated))?;
            println!("Translated {} from {} to {}", kind, input.display(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", translated)?;
        }
    }

    Ok(())
}

/// Log a warning when `lang` would pass input through untranslated
fn warn_if_unsupported(translator: &Translator, lang: &str) -> bool {
    let supported = translator.language_code(lang).is_some();
    if !supported {
        log::warn!("'{}' is not a supported language, output is unchanged", lang);
    }
    supported
}

fn cmd_word(
    data: &Path,
    vocab: &str,
    lang: &str,
    overrides: Option<&Path>,
    words: &[String],
) -> compendium_core::Result<()> {
    let vocab: Vocabulary = vocab.parse()?;
    let translator = load_translator(data, overrides)?;
    let code = translator.language_code(lang);

    for word in words {
        println!("{}\t{}", word, translator.translate_word(word, code, vocab));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_if_unsupported() {
        let tables = LookupTables::new(vec!["en".into(), "ja".into(), "fr".into()]);
        let translator = Translator::new(tables);

        assert!(warn_if_unsupported(&translator, "fr"));
        assert!(!warn_if_unsupported(&translator, "en"));
        assert!(!warn_if_unsupported(&translator, "de"));
    }
}
