use crate::config::file::FileConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "cart-count")]
#[command(about = "Cart badge counter over a file-backed key/value store")]
pub struct CliConfig {
    #[arg(long, default_value = "./store")]
    pub store_path: String,

    #[arg(long, default_value = "cart")]
    pub cart_key: String,

    #[arg(long, default_value = "cart-count")]
    pub element_id: String,

    #[arg(long, help = "TOML config file overriding the store settings")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[command(about = "Render the current cart count once")]
    Count,

    #[command(about = "Print the cart line items and subtotal")]
    Show,

    #[command(about = "Add a line item; items with the same product id are merged")]
    Add {
        #[arg(long)]
        product_id: i64,

        #[arg(long, default_value = "1")]
        quantity: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<f64>,
    },

    #[command(about = "Set the quantity of an existing line item; 0 removes it")]
    SetQuantity {
        #[arg(long)]
        product_id: i64,

        #[arg(long)]
        quantity: u64,
    },

    #[command(about = "Remove a line item")]
    Remove {
        #[arg(long)]
        product_id: i64,
    },

    #[command(about = "Empty the cart")]
    Clear,
}

impl CliConfig {
    /// Fold a config file into the CLI settings. File values win over the
    /// CLI defaults.
    pub fn apply_file(&mut self, file: &FileConfig) {
        if let Some(path) = &file.store.path {
            self.store_path = path.clone();
        }
        if let Some(key) = &file.store.cart_key {
            self.cart_key = key.clone();
        }
        if let Some(id) = &file.store.element_id {
            self.element_id = id.clone();
        }
    }
}

impl ConfigProvider for CliConfig {
    fn store_path(&self) -> &str {
        &self.store_path
    }

    fn cart_key(&self) -> &str {
        &self.cart_key
    }

    fn element_id(&self) -> &str {
        &self.element_id
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("store_path", &self.store_path)?;
        validation::validate_store_key("cart_key", &self.cart_key)?;
        validation::validate_element_id("element_id", &self.element_id)?;
        Ok(())
    }
}
