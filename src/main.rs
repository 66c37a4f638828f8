#[tokio::main]
async fn main() {
    findeasy::start_server().await;
}
