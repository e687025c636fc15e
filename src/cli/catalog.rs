#![expect(
    clippy::print_stdout,
    reason = "command output is the CLI's user interface"
)]

use clap::{Args, Subcommand};

use eshop_client::{
    api::StorefrontApi as _,
    catalog::models::{Product, ProductFilter},
    config::{AssetConfig, BackendConfig},
    context::AppContext,
};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products, optionally filtered
    List(ListProductsArgs),
    /// Show a single product
    Get(GetProductArgs),
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    #[command(flatten)]
    backend: BackendConfig,

    /// Only products in this category
    #[arg(long)]
    category_id: Option<i64>,

    /// Only products of this brand
    #[arg(long)]
    brand_id: Option<i64>,

    /// Backend search term
    #[arg(long)]
    search: Option<String>,
}

#[derive(Debug, Args)]
struct GetProductArgs {
    #[command(flatten)]
    backend: BackendConfig,

    #[command(flatten)]
    assets: AssetConfig,

    /// Product id
    id: i64,
}

pub(crate) async fn run_products(command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list_products(args).await,
        ProductsSubcommand::Get(args) => get_product(args).await,
    }
}

async fn list_products(args: ListProductsArgs) -> Result<(), String> {
    let ctx = AppContext::from_backend_config(&args.backend);

    let filter = ProductFilter {
        category_id: args.category_id,
        brand_id: args.brand_id,
        search: args.search,
    };

    let products = ctx
        .api
        .list_products(filter)
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in &products {
        print_product_line(product);
    }

    Ok(())
}

async fn get_product(args: GetProductArgs) -> Result<(), String> {
    let ctx = AppContext::from_backend_config(&args.backend);

    let product = ctx
        .api
        .get_product(args.id)
        .await
        .map_err(|error| format!("failed to fetch product {}: {error}", args.id))?;

    println!("name: {}", product.name);
    println!("price: ${}", product.price_label());
    println!("stock: {}", product.stock);
    println!("image: {}", product.image_url(&args.assets));

    if !product.description.is_empty() {
        println!("description: {}", product.description);
    }

    if let Some(category) = &product.category {
        println!("category: {}", category.name);
    }

    if let Some(brand) = &product.brand {
        println!("brand: {}", brand.name);
    }

    Ok(())
}

fn print_product_line(product: &Product) {
    println!(
        "{:>5}  {}  ${}  (stock {})",
        product.id,
        product.name,
        product.price_label(),
        product.stock
    );
}

#[derive(Debug, Args)]
pub(crate) struct CategoriesCommand {
    #[command(subcommand)]
    command: CategoriesSubcommand,
}

#[derive(Debug, Subcommand)]
enum CategoriesSubcommand {
    /// List all categories
    List(BackendArgs),
    /// Show a single category
    Get(GetByIdArgs),
}

#[derive(Debug, Args)]
struct BackendArgs {
    #[command(flatten)]
    backend: BackendConfig,
}

#[derive(Debug, Args)]
struct GetByIdArgs {
    #[command(flatten)]
    backend: BackendConfig,

    /// Record id
    id: i64,
}

pub(crate) async fn run_categories(command: CategoriesCommand) -> Result<(), String> {
    match command.command {
        CategoriesSubcommand::List(args) => {
            let ctx = AppContext::from_backend_config(&args.backend);

            let categories = ctx
                .api
                .list_categories()
                .await
                .map_err(|error| format!("failed to list categories: {error}"))?;

            for category in &categories {
                println!("{:>5}  {}", category.id, category.name);
            }

            Ok(())
        }
        CategoriesSubcommand::Get(args) => {
            let ctx = AppContext::from_backend_config(&args.backend);

            let category = ctx
                .api
                .get_category(args.id)
                .await
                .map_err(|error| format!("failed to fetch category {}: {error}", args.id))?;

            println!("name: {}", category.name);

            if !category.description.is_empty() {
                println!("description: {}", category.description);
            }

            if let Some(products) = &category.products {
                for product in products {
                    print_product_line(product);
                }
            }

            Ok(())
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct BrandsCommand {
    #[command(subcommand)]
    command: BrandsSubcommand,
}

#[derive(Debug, Subcommand)]
enum BrandsSubcommand {
    /// List all brands
    List(BackendArgs),
    /// Show a single brand
    Get(GetByIdArgs),
}

pub(crate) async fn run_brands(command: BrandsCommand) -> Result<(), String> {
    match command.command {
        BrandsSubcommand::List(args) => {
            let ctx = AppContext::from_backend_config(&args.backend);

            let brands = ctx
                .api
                .list_brands()
                .await
                .map_err(|error| format!("failed to list brands: {error}"))?;

            for brand in &brands {
                println!("{:>5}  {}", brand.id, brand.name);
            }

            Ok(())
        }
        BrandsSubcommand::Get(args) => {
            let ctx = AppContext::from_backend_config(&args.backend);

            let brand = ctx
                .api
                .get_brand(args.id)
                .await
                .map_err(|error| format!("failed to fetch brand {}: {error}", args.id))?;

            println!("name: {}", brand.name);

            if !brand.description.is_empty() {
                println!("description: {}", brand.description);
            }

            if let Some(products) = &brand.products {
                for product in products {
                    print_product_line(product);
                }
            }

            Ok(())
        }
    }
}
