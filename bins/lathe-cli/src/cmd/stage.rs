use lathe_client::LatheClient;
use lathe_client::model::StageDataSourceRequest;

use crate::config::StageArgs;
use crate::error::CliError;

pub async fn run(client: &LatheClient, args: StageArgs) -> Result<(), CliError> {
    let requests = args
        .queries
        .iter()
        .map(|q| {
            let request = StageDataSourceRequest::new(&args.database, q);
            match &args.table {
                Some(table) => request.with_table(table),
                None => request,
            }
        })
        .collect();

    tracing::info!(database = %args.database, count = args.queries.len(), "staging data");
    let chip_ids = client
        .stage_data_many(requests, args.chip_id.as_deref())
        .await?;

    for chip_id in chip_ids {
        println!("{chip_id}");
    }
    Ok(())
}
