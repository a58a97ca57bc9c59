use std::path::Path;

use documents::WinnerListReport;
use storage::dto::prize::WinnerReportPayload;

use crate::Result;

/// Render a winner list from a JSON export of `{ event, prizes }`.
///
/// Returns the number of prizes written.
pub async fn render_winner_report_file(input: &Path, output: &Path) -> Result<usize> {
    let content = tokio::fs::read_to_string(input).await?;
    let payload: WinnerReportPayload = serde_json::from_str(&content)?;
    let (event, prizes) = payload.into_parts()?;

    let bytes = WinnerListReport::new(&event, &prizes).render()?;
    tokio::fs::write(output, bytes).await?;

    Ok(prizes.len())
}
