pub mod markup;
pub mod metrics;

pub use markup::{headings, headings_of_level, images, links, paragraphs, sanitize_markup,
    strip_markup, Heading, Image};
pub use metrics::{clean_text, paragraph_count, sentence_count, sentences, syllable_count,
    total_syllables, word_count};
