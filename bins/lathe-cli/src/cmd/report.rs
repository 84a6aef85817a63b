use lathe_client::LatheClient;
use lathe_client::render::render_table;

use crate::config::ReportArgs;
use crate::error::CliError;

pub async fn run(client: &LatheClient, args: ReportArgs) -> Result<(), CliError> {
    tracing::info!(chips = args.chip_ids.len(), queries = args.queries.len(), "running report");
    let results = client.generate_report(args.chip_ids, args.queries).await?;

    for (idx, result) in &results {
        println!("Query {idx} results:");
        if let Some(error) = &result.error {
            println!("Error: {error}");
            println!();
            continue;
        }
        let mut cursor = result.cursor();
        for line in render_table(&mut cursor)? {
            println!("{line}");
        }
        cursor.close();
        println!();
    }
    Ok(())
}
