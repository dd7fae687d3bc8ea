use assetprep_lib::cli::{parse_args, resolve_command, run_install};
use assetprep_lib::error::AssetPrepError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AssetPrepError> {
    color_eyre::install()?;

    let args = parse_args();
    let params = resolve_command(args.command)?;

    // Failed downloads are reported in the summary and do not change the exit code.
    run_install(params).await?;

    Ok(())
}
