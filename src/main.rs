#[tokio::main]
async fn main() {
    if let Err(e) = grading_mock::run().await {
        eprintln!("grading-mock fatal: {e:#}");
        std::process::exit(1);
    }
}
