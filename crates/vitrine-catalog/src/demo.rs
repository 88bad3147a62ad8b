//! Demo catalog data.
//!
//! A fixed six-product table used by the demo surfaces and the tests. In a
//! full deployment the [`CatalogSource`](crate::source::CatalogSource)
//! implementation would be backed by a real service instead.

use crate::ids::{Category, ProductId};
use crate::price::Price;
use crate::product::{DetailEntry, Product};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the demo catalog, in catalog (featured) order.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Premium Wireless Headphones".to_string(),
            price: Price::from_cents(19999),
            original_price: Some(Price::from_cents(24999)),
            discount_percent: Some(20),
            category: Category::new("electronics"),
            rating: 4.5,
            review_count: 128,
            image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            ]),
            colors: strings(&["black", "silver", "blue"]),
            sizes: strings(&["One Size"]),
            in_stock: Some(true),
            features: strings(&[
                "Active Noise Cancellation",
                "30-hour battery life",
                "Bluetooth 5.0",
                "Built-in microphone",
                "Foldable design",
            ]),
            details: vec![
                DetailEntry::new("Brand", "AudioMaster"),
                DetailEntry::new("Model", "AM-WH300"),
                DetailEntry::new("Connectivity", "Bluetooth 5.0"),
                DetailEntry::new("Battery", "30 hours"),
            ],
            description: Some(
                "Experience crystal-clear sound with our premium wireless headphones. \
                 Featuring active noise cancellation, 30-hour battery life, and comfortable \
                 over-ear design for extended listening sessions."
                    .to_string(),
            ),
        },
        Product {
            id: ProductId::new(2),
            name: "Organic Cotton T-Shirt".to_string(),
            price: Price::from_cents(2999),
            original_price: None,
            discount_percent: None,
            category: Category::new("clothing"),
            rating: 4.2,
            review_count: 56,
            image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
                "https://images.unsplash.com/photo-1529374255404-311a2a4f1fd9?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            ]),
            colors: strings(&["white", "black", "gray"]),
            sizes: strings(&["S", "M", "L", "XL"]),
            in_stock: Some(true),
            features: Vec::new(),
            details: vec![
                DetailEntry::new("Material", "100% Organic Cotton"),
                DetailEntry::new("Fit", "Regular"),
                DetailEntry::new("Care", "Machine wash cold"),
            ],
            description: Some(
                "Soft organic cotton t-shirt made from 100% certified organic materials. \
                 Comfortable fit for everyday wear."
                    .to_string(),
            ),
        },
        Product {
            id: ProductId::new(3),
            name: "Stainless Steel Water Bottle".to_string(),
            price: Price::from_cents(2495),
            original_price: Some(Price::from_cents(3495)),
            discount_percent: Some(29),
            category: Category::new("accessories"),
            rating: 4.8,
            review_count: 212,
            image: "https://images.unsplash.com/photo-1602143407151-7111542de6e8?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1602143407151-7111542de6e8?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            ]),
            colors: strings(&["silver", "black", "blue"]),
            sizes: strings(&["500ml", "750ml"]),
            in_stock: Some(true),
            features: strings(&[
                "24-hour cold retention",
                "Leak-proof lid",
                "BPA-free materials",
            ]),
            details: Vec::new(),
            description: Some(
                "Insulated stainless steel bottle keeps drinks cold for 24 hours or hot for \
                 12 hours."
                    .to_string(),
            ),
        },
        Product {
            id: ProductId::new(4),
            name: "Wireless Charging Stand".to_string(),
            price: Price::from_cents(3999),
            original_price: Some(Price::from_cents(4999)),
            discount_percent: Some(20),
            category: Category::new("electronics"),
            rating: 4.2,
            review_count: 67,
            image: "https://images.unsplash.com/photo-1583394838336-acd977736f90?ixlib=rb-1.2.1&w=300&h=300&fit=crop".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1583394838336-acd977736f90?ixlib=rb-1.2.1&w=800&h=800&fit=crop",
            ]),
            colors: strings(&["white", "black"]),
            sizes: Vec::new(),
            in_stock: Some(true),
            features: strings(&[
                "LED charging indicator",
                "Non-slip base",
                "Overheat protection",
            ]),
            details: Vec::new(),
            description: Some(
                "15W fast charging stand compatible with Qi-enabled devices.".to_string(),
            ),
        },
        Product {
            id: ProductId::new(5),
            name: "Leather Wallet with RFID Protection".to_string(),
            price: Price::from_cents(4999),
            original_price: Some(Price::from_cents(5999)),
            discount_percent: Some(17),
            category: Category::new("accessories"),
            rating: 4.6,
            review_count: 143,
            image: "https://images.unsplash.com/photo-1591561954555-607968c989ab?ixlib=rb-1.2.1&w=300&h=300&fit=crop".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1591561954555-607968c989ab?ixlib=rb-1.2.1&w=800&h=800&fit=crop",
            ]),
            colors: strings(&["brown", "black"]),
            sizes: Vec::new(),
            in_stock: Some(true),
            features: strings(&["Hand-stitched", "Money clip", "ID window"]),
            details: Vec::new(),
            description: Some(
                "Genuine leather wallet with 8 card slots and RFID blocking technology."
                    .to_string(),
            ),
        },
        Product {
            id: ProductId::new(6),
            name: "Yoga Mat (6mm Thick)".to_string(),
            price: Price::from_cents(3499),
            original_price: None,
            discount_percent: None,
            category: Category::new("fitness"),
            rating: 4.5,
            review_count: 89,
            image: "https://images.unsplash.com/photo-1545205597-3d9d02c29597?ixlib=rb-1.2.1&w=800&h=800&fit=crop".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1545205597-3d9d02c29597?ixlib=rb-1.2.1&w=800&h=800&fit=crop",
            ]),
            colors: strings(&["purple", "teal", "charcoal"]),
            sizes: strings(&["Standard (68\" x 24\")"]),
            in_stock: Some(true),
            features: strings(&["Non-toxic materials", "Lightweight", "Easy to clean"]),
            details: Vec::new(),
            description: Some("Eco-friendly non-slip yoga mat with carrying strap.".to_string()),
        },
    ]
}
