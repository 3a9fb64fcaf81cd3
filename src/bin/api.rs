pub use share_post::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    share_post::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
