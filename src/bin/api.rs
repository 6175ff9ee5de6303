pub use atcoder_summary::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    atcoder_summary::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
