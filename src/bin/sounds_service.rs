use wordswap::domain::ServiceKind;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    wordswap::run_service(ServiceKind::SoundsLike).await
}
