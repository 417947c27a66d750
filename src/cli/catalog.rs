// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Locally staged catalog commands. Everything here works on the catalog
//! file; nothing talks to the panel.

use clap::Subcommand;

use crate::catalog::{
    Catalog, CategoryPatch, OrderFilter, ProductDraft, ProductFilter, ProductPatch,
};
use crate::config::Config;
use crate::error::Result;
use crate::models::{OrderStatus, ProductStatus};

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// Products
    #[command(subcommand)]
    Products(ProductsCommand),
    /// Categories
    #[command(subcommand)]
    Categories(CategoriesCommand),
    /// Orders
    #[command(subcommand)]
    Orders(OrdersCommand),
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List products
    List {
        /// Substring of name or article, case-insensitive
        #[arg(long)]
        search: Option<String>,

        /// Exact category name
        #[arg(long)]
        category: Option<String>,

        /// active, draft or out_of_stock
        #[arg(long)]
        status: Option<ProductStatus>,
    },
    /// Add a product
    Add {
        #[arg(long)]
        name: String,

        /// Article number (SKU)
        #[arg(long)]
        article: String,

        #[arg(long)]
        price: f64,

        /// Pre-discount price shown struck through
        #[arg(long)]
        old_price: Option<f64>,

        #[arg(long, default_value_t = 0)]
        stock: u32,

        #[arg(long, default_value = "")]
        category: String,

        /// active, draft or out_of_stock
        #[arg(long, default_value = "draft")]
        status: ProductStatus,
    },
    /// Edit a product (unset flags keep current values)
    Edit {
        #[arg(long)]
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        article: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        old_price: Option<f64>,

        #[arg(long)]
        stock: Option<u32>,

        #[arg(long)]
        category: Option<String>,

        /// active, draft or out_of_stock
        #[arg(long)]
        status: Option<ProductStatus>,
    },
    /// Delete a product
    Delete {
        #[arg(long)]
        id: u64,
    },
    /// Summary counts by status
    Stats,
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List categories with live product counts
    List {
        /// Substring of name or slug, case-insensitive
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a category
    Add {
        #[arg(long)]
        name: String,

        /// URL slug; derived from the name when omitted
        #[arg(long)]
        slug: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Parent category ID for nesting
        #[arg(long)]
        parent: Option<u64>,
    },
    /// Edit a category (unset flags keep current values)
    Edit {
        #[arg(long)]
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        slug: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Show or hide the category in the storefront
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a category (products keep their category name)
    Delete {
        #[arg(long)]
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List orders
    List {
        /// Substring of customer name, or digits of the order number
        #[arg(long)]
        search: Option<String>,

        /// pending, processing, shipped, delivered or cancelled
        #[arg(long)]
        status: Option<OrderStatus>,
    },
    /// Record a new pending order dated today
    Add {
        #[arg(long)]
        customer: String,

        #[arg(long)]
        total: f64,

        #[arg(long, default_value_t = 1)]
        items: u32,
    },
    /// Move an order to a new status
    SetStatus {
        #[arg(long)]
        id: u64,

        /// pending, processing, shipped, delivered or cancelled
        #[arg(long)]
        status: OrderStatus,
    },
    /// Summary counts by status
    Stats,
}

pub fn run(config: &Config, command: CatalogCommand) -> Result<()> {
    let mut catalog = Catalog::open(config.catalog_path.clone())?;

    match command {
        CatalogCommand::Products(command) => run_products(&mut catalog, command),
        CatalogCommand::Categories(command) => run_categories(&mut catalog, command),
        CatalogCommand::Orders(command) => run_orders(&mut catalog, command),
    }
}

fn run_products(catalog: &mut Catalog, command: ProductsCommand) -> Result<()> {
    match command {
        ProductsCommand::List {
            search,
            category,
            status,
        } => {
            let filter = ProductFilter {
                search,
                category,
                status,
            };
            let products = catalog.products(&filter);
            if products.is_empty() {
                println!("No products match");
                return Ok(());
            }
            println!(
                "{:>4}  {:<28} {:<12} {:>10} {:>6}  {:<16} status",
                "id", "name", "article", "price", "stock", "category"
            );
            for product in products {
                println!(
                    "{:>4}  {:<28} {:<12} {:>10.2} {:>6}  {:<16} {}",
                    product.id,
                    product.name,
                    product.article,
                    product.price,
                    product.stock,
                    product.category,
                    product.status
                );
            }
        }
        ProductsCommand::Add {
            name,
            article,
            price,
            old_price,
            stock,
            category,
            status,
        } => {
            let product = catalog.add_product(ProductDraft {
                name,
                article,
                price,
                old_price,
                stock,
                category,
                status,
            })?;
            println!("Added product {} (id {})", product.name, product.id);
        }
        ProductsCommand::Edit {
            id,
            name,
            article,
            price,
            old_price,
            stock,
            category,
            status,
        } => {
            let product = catalog.update_product(
                id,
                ProductPatch {
                    name,
                    article,
                    price,
                    old_price,
                    stock,
                    category,
                    status,
                },
            )?;
            println!("Updated product {} (id {})", product.name, product.id);
        }
        ProductsCommand::Delete { id } => {
            catalog.remove_product(id)?;
            println!("Deleted product {}", id);
        }
        ProductsCommand::Stats => {
            let stats = catalog.product_stats();
            println!("products:     {}", stats.total);
            println!("  active:       {}", stats.active);
            println!("  out of stock: {}", stats.out_of_stock);
            println!("  drafts:       {}", stats.drafts);
        }
    }
    Ok(())
}

fn run_categories(catalog: &mut Catalog, command: CategoriesCommand) -> Result<()> {
    match command {
        CategoriesCommand::List { search } => {
            let categories = catalog.categories(search.as_deref());
            if categories.is_empty() {
                println!("No categories match");
                return Ok(());
            }
            println!(
                "{:>4}  {:<24} {:<24} {:>8}  {:<8} active",
                "id", "name", "slug", "products", "parent"
            );
            for category in categories {
                let parent = category
                    .parent_id
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:>4}  {:<24} {:<24} {:>8}  {:<8} {}",
                    category.id,
                    category.name,
                    category.slug,
                    category.products_count,
                    parent,
                    if category.is_active { "yes" } else { "no" }
                );
            }
        }
        CategoriesCommand::Add {
            name,
            slug,
            description,
            parent,
        } => {
            let category = catalog.add_category(&name, slug.as_deref(), description, parent)?;
            println!(
                "Added category {} (id {}, slug {})",
                category.name, category.id, category.slug
            );
        }
        CategoriesCommand::Edit {
            id,
            name,
            slug,
            description,
            active,
        } => {
            let category = catalog.update_category(
                id,
                CategoryPatch {
                    name,
                    slug,
                    description,
                    is_active: active,
                },
            )?;
            println!("Updated category {} (id {})", category.name, category.id);
        }
        CategoriesCommand::Delete { id } => {
            catalog.remove_category(id)?;
            println!("Deleted category {}", id);
        }
    }
    Ok(())
}

fn run_orders(catalog: &mut Catalog, command: OrdersCommand) -> Result<()> {
    match command {
        OrdersCommand::List { search, status } => {
            let filter = OrderFilter { search, status };
            let orders = catalog.orders(&filter);
            if orders.is_empty() {
                println!("No orders match");
                return Ok(());
            }
            println!(
                "{:>6}  {:<24} {:<12} {:>12} {:>6}  status",
                "id", "customer", "date", "total", "items"
            );
            for order in orders {
                println!(
                    "{:>6}  {:<24} {:<12} {:>12.2} {:>6}  {}",
                    order.id, order.customer, order.date, order.total, order.items, order.status
                );
            }
        }
        OrdersCommand::Add {
            customer,
            total,
            items,
        } => {
            let order = catalog.record_order(&customer, total, items)?;
            println!("Recorded order {} for {}", order.id, order.customer);
        }
        OrdersCommand::SetStatus { id, status } => {
            let order = catalog.set_order_status(id, status)?;
            println!("Order {} is now {}", order.id, order.status);
        }
        OrdersCommand::Stats => {
            let stats = catalog.order_stats();
            println!("orders:       {}", stats.total);
            println!("  pending:      {}", stats.pending);
            println!("  processing:   {}", stats.processing);
            println!("  delivered:    {}", stats.delivered);
        }
    }
    Ok(())
}
