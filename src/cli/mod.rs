use clap::{Parser, Subcommand};

mod account;
mod catalog;

#[derive(Debug, Parser)]
#[command(name = "eshop", about = "E-Shop storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse and search products
    Products(catalog::ProductsCommand),
    /// Browse categories
    Categories(catalog::CategoriesCommand),
    /// Browse brands
    Brands(catalog::BrandsCommand),
    /// Authentication and profile
    Account(account::AccountCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Products(command) => catalog::run_products(command).await,
            Commands::Categories(command) => catalog::run_categories(command).await,
            Commands::Brands(command) => catalog::run_brands(command).await,
            Commands::Account(command) => account::run(command).await,
        }
    }
}
