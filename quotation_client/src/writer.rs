//! Writing the quotation to the output file.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use quotation_common::{Quotation, Result};

/// Truncate `path` and write the single line `Dólar: <bid>\n`.
///
/// Open and write failures surface as `QuotationError::Persistence`.
pub fn save_quotation(path: &Path, quotation: &Quotation) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(quotation.to_file_line().as_bytes())?;
    file.flush()?;
    Ok(())
}
