use cart_count::utils::{logger, validation::Validate};
use cart_count::{
    CartCountSubscription, CartCounter, CartEditor, CliConfig, Command, ConsoleDisplay,
    FileConfig, FileStore, LineItem, NotifyingStore,
};
use clap::Parser;
use std::sync::Arc;

type Store = NotifyingStore<FileStore>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cart-count CLI");

    if let Some(path) = config.config.clone() {
        let file = FileConfig::from_file(&path)?;
        config.apply_file(&file);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let store = Arc::new(NotifyingStore::new(FileStore::new(
        config.store_path.clone(),
    )));
    let display = Arc::new(ConsoleDisplay::new());
    let counter = CartCounter::new(store.clone(), display, &config);
    let editor = CartEditor::new(store.clone(), &config);
    let mut subscription = CartCountSubscription::new(store.subscribe(), counter.clone());

    if let Err(e) = run(&config, &counter, &editor, &mut subscription).await {
        tracing::error!("cart-count failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(
    config: &CliConfig,
    counter: &CartCounter<Store, ConsoleDisplay>,
    editor: &CartEditor<Store>,
    subscription: &mut CartCountSubscription<Store, ConsoleDisplay>,
) -> cart_count::Result<()> {
    // Initial render mirrors the page-load hook. Edits below re-render
    // through the store subscription, not by calling the counter directly.
    counter.initialize().await?;

    match &config.command {
        Command::Count => {}
        Command::Show => {
            let items = editor.items().await?;
            for item in &items {
                let name = item.product_name.as_deref().unwrap_or("-");
                let id = item
                    .product_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                match item.price {
                    Some(price) => {
                        println!("{:>4} x {} (product {}) @ {:.2}", item.quantity, name, id, price)
                    }
                    None => println!("{:>4} x {} (product {})", item.quantity, name, id),
                }
            }
            println!("subtotal: {:.2}", editor.subtotal().await?);
        }
        Command::Add {
            product_id,
            quantity,
            name,
            price,
        } => {
            let item = LineItem {
                quantity: *quantity,
                product_id: Some(*product_id),
                product_name: name.clone(),
                price: *price,
            };
            editor.add_item(item).await?;
            subscription.process_pending().await?;
        }
        Command::SetQuantity {
            product_id,
            quantity,
        } => {
            editor.set_quantity(*product_id, *quantity).await?;
            subscription.process_pending().await?;
        }
        Command::Remove { product_id } => {
            editor.remove_item(*product_id).await?;
            subscription.process_pending().await?;
        }
        Command::Clear => {
            editor.clear().await?;
            subscription.process_pending().await?;
        }
    }

    Ok(())
}
