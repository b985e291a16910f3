use anyhow::Context;
use clap::Parser;
use rocket_cart::core::ConfigProvider;
use rocket_cart::utils::{logger, validation::Validate};
use rocket_cart::{
    use_cart, Cart, CartCommand, CartProvider, CliConfig, ConsoleNotifier, FileStore, HttpCatalog,
    Messages, StoreOptions, TomlConfig, UpdateProductAmount,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 指定 --config 時以檔案為準
    let settings: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.validate()?;
            Box::new(config)
        }
        None => {
            cli.validate()?;
            Box::new(cli.clone())
        }
    };

    let catalog = HttpCatalog::with_timeout(
        settings.api_base_url(),
        Duration::from_secs(settings.request_timeout_seconds()),
    )?;
    let storage = FileStore::new(settings.storage_dir());
    let options = StoreOptions {
        storage_key: settings.storage_key().to_string(),
        messages: Messages::for_locale(settings.locale()),
    };

    let provider = CartProvider::init(catalog, storage, ConsoleNotifier, options);
    let cart = use_cart(Some(&provider))?;

    match cli.command {
        CartCommand::Show => {}
        CartCommand::Add { product_id } => cart.add_product(product_id).await?,
        CartCommand::Remove { product_id } => cart.remove_product(product_id).await?,
        CartCommand::Update { product_id, amount } => {
            cart.update_product_amount(UpdateProductAmount { product_id, amount })
                .await?
        }
    }

    print_cart(&cart.cart().await?);
    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    println!("🛒 {} products, {} items", cart.len(), cart.item_count());
    for item in cart.iter() {
        println!(
            "{:>6}  {:>3} x {:>10.2} = {:>10.2}  {}",
            item.id(),
            item.amount,
            item.product.price,
            item.subtotal(),
            item.product.title
        );
    }
    println!("Total: {:.2}", cart.total());
}
