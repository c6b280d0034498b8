#[tokio::main]
async fn main() {
    env_logger::init();

    println!("Testing Permission flows...");
    permikit_permission_demo::run().await;
}
