#[tokio::main]
async fn main() {
    if let Err(e) = bookstore::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
