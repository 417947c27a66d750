// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local catalog staging.
//!
//! Products, categories and orders live in one JSON document edited in
//! place by the CLI. Nothing here talks to the network; the panel's
//! data-copy operation is how staged accounts get populated server-side.
//!
//! Handles:
//! - CRUD over products and categories, order intake and status moves
//! - Case-insensitive search and status/category filters
//! - Summary counts matching the panel's dashboard cards

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Category, Order, OrderStatus, Product, ProductStatus};

/// Everything the catalog file holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct CatalogData {
    products: Vec<Product>,
    categories: Vec<Category>,
    orders: Vec<Order>,
}

/// New product as accepted by [`Catalog::add_product`].
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub article: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub stock: u32,
    pub category: String,
    pub status: ProductStatus,
}

/// Field-by-field product update; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub article: Option<String>,
    pub price: Option<f64>,
    pub old_price: Option<f64>,
    pub stock: Option<u32>,
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
}

/// Field-by-field category update; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Product listing filter. Empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring matched against name and article
    pub search: Option<String>,
    /// Exact category name
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        if let Some(q) = &self.search {
            let q = q.to_lowercase();
            if !product.name.to_lowercase().contains(&q)
                && !product.article.to_lowercase().contains(&q)
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if product.status != status {
                return false;
            }
        }
        true
    }
}

/// Order listing filter. Empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Case-insensitive substring matched against the customer name, or a
    /// digit substring of the order number
    pub search: Option<String>,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        if let Some(q) = &self.search {
            let q_lower = q.to_lowercase();
            if !order.customer.to_lowercase().contains(&q_lower)
                && !order.id.to_string().contains(q.trim())
            {
                return false;
            }
        }
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        true
    }
}

/// Product counts shown on the catalog overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductStats {
    pub total: usize,
    pub active: usize,
    pub out_of_stock: usize,
    pub drafts: usize,
}

/// Order counts shown on the orders overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub delivered: usize,
}

/// The staged catalog, loaded from and persisted to one JSON file.
///
/// Every mutating call persists before returning, so the file always
/// reflects the last completed operation.
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    data: CatalogData,
}

impl Catalog {
    /// Open the catalog at `path`. A missing file yields an empty catalog;
    /// a file that exists but does not parse is an error, not data loss.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::Storage(format!(
                    "catalog file {} is corrupt: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CatalogData::default(),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "cannot read catalog file {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        Ok(Self { path, data })
    }

    // ─── Products ────────────────────────────────────────────────────────────

    /// Products matching `filter`, in insertion order.
    pub fn products(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.data
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .collect()
    }

    /// Add a product and return it with its assigned ID.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<Product> {
        if draft.name.trim().is_empty() || draft.article.trim().is_empty() {
            return Err(AppError::Validation(
                "product name and article are required".to_string(),
            ));
        }
        validate_price(draft.price)?;
        if let Some(old) = draft.old_price {
            validate_price(old)?;
        }

        let product = Product {
            id: next_id(self.data.products.iter().map(|p| p.id)),
            name: draft.name,
            article: draft.article,
            price: draft.price,
            old_price: draft.old_price,
            stock: draft.stock,
            category: draft.category,
            status: draft.status,
        };
        self.data.products.push(product.clone());
        self.persist()?;
        Ok(product)
    }

    /// Apply `patch` to the product with `id`.
    pub fn update_product(&mut self, id: u64, patch: ProductPatch) -> Result<Product> {
        if let Some(price) = patch.price {
            validate_price(price)?;
        }
        if let Some(old) = patch.old_price {
            validate_price(old)?;
        }

        let product = self
            .data
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(article) = patch.article {
            product.article = article;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(old_price) = patch.old_price {
            product.old_price = Some(old_price);
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(status) = patch.status {
            product.status = status;
        }

        let updated = product.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Remove the product with `id`.
    pub fn remove_product(&mut self, id: u64) -> Result<()> {
        let before = self.data.products.len();
        self.data.products.retain(|p| p.id != id);
        if self.data.products.len() == before {
            return Err(AppError::NotFound(format!("product {}", id)));
        }
        self.persist()
    }

    /// Counts over the whole product list, ignoring filters.
    pub fn product_stats(&self) -> ProductStats {
        let by_status = |status: ProductStatus| {
            self.data
                .products
                .iter()
                .filter(|p| p.status == status)
                .count()
        };
        ProductStats {
            total: self.data.products.len(),
            active: by_status(ProductStatus::Active),
            out_of_stock: by_status(ProductStatus::OutOfStock),
            drafts: by_status(ProductStatus::Draft),
        }
    }

    // ─── Categories ──────────────────────────────────────────────────────────

    /// Categories with live product counts, optionally filtered by a
    /// case-insensitive substring of name or slug.
    pub fn categories(&self, search: Option<&str>) -> Vec<Category> {
        self.data
            .categories
            .iter()
            .filter(|c| match search {
                Some(q) => {
                    let q = q.to_lowercase();
                    c.name.to_lowercase().contains(&q) || c.slug.to_lowercase().contains(&q)
                }
                None => true,
            })
            .cloned()
            .map(|mut c| {
                c.products_count = self.count_products_in(&c.name);
                c
            })
            .collect()
    }

    /// Add a category. A missing slug is derived from the name.
    pub fn add_category(
        &mut self,
        name: &str,
        slug: Option<&str>,
        description: Option<String>,
        parent_id: Option<u64>,
    ) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("category name is required".to_string()));
        }
        if let Some(parent) = parent_id {
            if !self.data.categories.iter().any(|c| c.id == parent) {
                return Err(AppError::NotFound(format!("category {}", parent)));
            }
        }

        let slug = match slug.map(str::trim).filter(|s| !s.is_empty()) {
            Some(slug) => slug.to_string(),
            None => slugify(name),
        };

        let category = Category {
            id: next_id(self.data.categories.iter().map(|c| c.id)),
            name: name.to_string(),
            slug,
            description,
            products_count: 0,
            parent_id,
            is_active: true,
        };
        self.data.categories.push(category.clone());
        self.persist()?;
        Ok(category)
    }

    /// Apply `patch` to the category with `id`.
    pub fn update_category(&mut self, id: u64, patch: CategoryPatch) -> Result<Category> {
        let category = self
            .data
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("category {}", id)))?;

        if let Some(name) = patch.name {
            category.name = name;
        }
        if let Some(slug) = patch.slug {
            category.slug = slug;
        }
        if let Some(description) = patch.description {
            category.description = Some(description);
        }
        if let Some(is_active) = patch.is_active {
            category.is_active = is_active;
        }

        let mut updated = category.clone();
        updated.products_count = self.count_products_in(&updated.name);
        self.persist()?;
        Ok(updated)
    }

    /// Remove the category with `id`. Products filed under it keep their
    /// category name; they are not reassigned.
    pub fn remove_category(&mut self, id: u64) -> Result<()> {
        let before = self.data.categories.len();
        self.data.categories.retain(|c| c.id != id);
        if self.data.categories.len() == before {
            return Err(AppError::NotFound(format!("category {}", id)));
        }
        self.persist()
    }

    fn count_products_in(&self, category_name: &str) -> u32 {
        self.data
            .products
            .iter()
            .filter(|p| p.category == category_name)
            .count() as u32
    }

    // ─── Orders ──────────────────────────────────────────────────────────────

    /// Orders matching `filter`, in insertion order.
    pub fn orders(&self, filter: &OrderFilter) -> Vec<&Order> {
        self.data
            .orders
            .iter()
            .filter(|o| filter.matches(o))
            .collect()
    }

    /// Record a new pending order dated today.
    pub fn record_order(&mut self, customer: &str, total: f64, items: u32) -> Result<Order> {
        let customer = customer.trim();
        if customer.is_empty() {
            return Err(AppError::Validation("customer name is required".to_string()));
        }
        validate_price(total)?;
        if items == 0 {
            return Err(AppError::Validation(
                "an order needs at least one item".to_string(),
            ));
        }

        let order = Order {
            id: next_id(self.data.orders.iter().map(|o| o.id)),
            customer: customer.to_string(),
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            total,
            status: OrderStatus::Pending,
            items,
        };
        self.data.orders.push(order.clone());
        self.persist()?;
        Ok(order)
    }

    /// Move the order with `id` to `status`.
    pub fn set_order_status(&mut self, id: u64, status: OrderStatus) -> Result<Order> {
        let order = self
            .data
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
        order.status = status;

        let updated = order.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Counts over the whole order list, ignoring filters.
    pub fn order_stats(&self) -> OrderStats {
        let by_status = |status: OrderStatus| {
            self.data
                .orders
                .iter()
                .filter(|o| o.status == status)
                .count()
        };
        OrderStats {
            total: self.data.orders.len(),
            pending: by_status(OrderStatus::Pending),
            processing: by_status(OrderStatus::Processing),
            delivered: by_status(OrderStatus::Delivered),
        }
    }

    // ─── Persistence ─────────────────────────────────────────────────────────

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Storage(format!(
                    "cannot create catalog directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let json = serde_json::to_vec_pretty(&self.data)
            .map_err(|e| AppError::Storage(format!("cannot encode catalog: {}", e)))?;

        // Same temp-and-rename dance as the session store: a crash mid-write
        // must not eat the previous catalog.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &json).map_err(|e| {
            AppError::Storage(format!("cannot write catalog file {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            AppError::Storage(format!(
                "cannot replace catalog file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

fn validate_price(value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Validation(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

/// Derive a URL slug from a display name. Cyrillic transliterates through
/// a fixed single-letter table; any other run outside `a-z0-9` collapses
/// to one hyphen.
fn slugify(name: &str) -> String {
    const CYRILLIC: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
    const LATIN: &[u8] = b"abvgdeejzijklmnoprstufhccss_y_eua";

    let mut slug = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        let c = match CYRILLIC.chars().position(|r| r == c) {
            Some(i) => LATIN[i] as char,
            None => c,
        };
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
