//! Catalog entities staged locally: products, categories, orders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Visible in the storefront
    Active,
    /// Being edited, not yet published
    Draft,
    /// Published but not purchasable
    OutOfStock,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProductStatus::Active => "active",
            ProductStatus::Draft => "draft",
            ProductStatus::OutOfStock => "out_of_stock",
        };
        f.write_str(s)
    }
}

impl FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProductStatus::Active),
            "draft" => Ok(ProductStatus::Draft),
            "out_of_stock" => Ok(ProductStatus::OutOfStock),
            other => Err(format!("unknown product status '{other}'")),
        }
    }
}

/// Product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product ID, assigned by the catalog
    pub id: u64,
    /// Display name
    pub name: String,
    /// Merchant's article number (SKU)
    pub article: String,
    /// Current price
    pub price: f64,
    /// Pre-discount price shown struck through, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    /// Units in stock
    pub stock: u32,
    /// Category name the product is filed under
    pub category: String,
    /// Lifecycle state
    pub status: ProductStatus,
}

/// Catalog category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category ID, assigned by the catalog
    pub id: u64,
    /// Display name
    pub name: String,
    /// URL slug
    pub slug: String,
    /// Optional description shown on the category page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of products filed under this category
    #[serde(default)]
    pub products_count: u32,
    /// Parent category for nested trees, None for top level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    /// Whether the category is shown in the storefront
    pub is_active: bool,
}

/// Fulfillment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, not yet picked up by staff
    Pending,
    /// Being assembled
    Processing,
    /// Handed to the carrier
    Shipped,
    /// Received by the customer
    Delivered,
    /// Cancelled before delivery
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status '{other}'")),
        }
    }
}

/// Customer order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order number, assigned by the catalog
    pub id: u64,
    /// Customer display name
    pub customer: String,
    /// Order date (YYYY-MM-DD)
    pub date: String,
    /// Order total
    pub total: f64,
    /// Fulfillment state
    pub status: OrderStatus,
    /// Number of line items
    pub items: u32,
}
