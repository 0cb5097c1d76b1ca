use crate::types::{Token, TokenFrequency};
use crate::Error;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

/// Writes `token<TAB>frequency` lines, one per pair, in the given order.
pub fn write_token_frequencies<W: Write>(
    writer: W,
    token_frequencies: &[(Token, TokenFrequency)],
) -> Result<(), Error> {
    let mut tsv_writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .has_headers(false)
        .from_writer(writer);

    for (token, frequency) in token_frequencies {
        tsv_writer.write_record([token.as_str(), frequency.to_string().as_str()])?;
    }

    tsv_writer.flush()?;

    Ok(())
}
