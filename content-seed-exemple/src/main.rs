use content_seed_core::{Config, ContentSeed};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows what the library is doing
    env_logger::init();

    // Usage: content-seed-exemple [seed] [word|sentence|paragraph|passage]
    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => Some(s.parse::<u64>().map_err(|_| format!("Seed must be an integer, got '{s}'"))?),
        None => None,
    };
    let unit = args.next().unwrap_or_else(|| "passage".to_owned());

    // Start from the defaults and override what you need.
    // Setters are applied in order, the last one wins.
    let config = Config::default()
        // Words between 2 and 8 characters (8 excluded)
        .min_word_length(2)
        .max_word_length(8)
        // Sentences between 5 and 12 words (12 excluded)
        .min_sentence_length(5)
        .max_sentence_length(12)
        // Between 2 and 4 paragraphs per passage (4 excluded)
        .min_paragraph_count(2)
        .max_paragraph_count(4)
        // Periods are now only 10 times more likely than '!' and '?'
        .add_punctuation_item(".", 10)
        // Punctuation items can be any string
        .add_punctuation_item("...", 2);

    // A seed makes the output reproducible, otherwise it changes on every run
    let mut seeder = match seed {
        Some(seed) => ContentSeed::seeded(config, seed)?,
        None => ContentSeed::new(config)?,
    };

    let text = match unit.as_str() {
        "word" => seeder.generate_word()?,
        "sentence" => seeder.generate_sentence()?,
        "paragraph" => seeder.generate_paragraph()?,
        "passage" => seeder.generate_passage()?,
        other => return Err(format!("Unknown unit '{other}', expected word, sentence, paragraph or passage").into()),
    };
    info!("Generated a {unit} of {} bytes", text.len());

    // The last generated text stays available on the generator
    print!("{}", seeder.output());
    if !seeder.output().ends_with('\n') {
        println!();
    }

    Ok(())
}
