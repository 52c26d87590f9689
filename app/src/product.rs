//! Read-only product summary shown by the product card, and the values the
//! card derives from it.

use serde::{Deserialize, Serialize};

pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub labeled_price: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub ratings: Option<Vec<f64>>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub shipping: Option<String>,
}

impl ProductView {
    /// Whole-percent saving against the labeled price; 0 without a higher
    /// labeled price.
    #[must_use]
    pub fn discount_percentage(&self) -> u32 {
        match self.labeled_price {
            Some(labeled) if labeled > 0.0 && labeled > self.price => {
                let percent = ((labeled - self.price) / labeled * 100.0).round();
                // 0 < percent <= 100 for non-negative prices.
                percent.clamp(0.0, 100.0) as u32
            }
            _ => 0,
        }
    }

    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount_percentage() > 0
    }

    /// Mean rating rounded to one decimal, 0.0 without ratings.
    #[must_use]
    pub fn average_rating(&self) -> f64 {
        let ratings = self.ratings.as_deref().unwrap_or_default();
        if ratings.is_empty() {
            return 0.0;
        }
        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    #[must_use]
    pub fn average_rating_label(&self) -> String {
        format!("{:.1}", self.average_rating())
    }

    /// Number of stars lit, out of [`MAX_STARS`].
    #[must_use]
    pub fn filled_stars(&self) -> u8 {
        self.average_rating()
            .round()
            .clamp(0.0, f64::from(MAX_STARS)) as u8
    }

    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Alternate view revealed on hover.
    #[must_use]
    pub fn hover_image(&self) -> Option<&str> {
        self.images.get(1).map(String::as_str)
    }

    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Category")
    }

    #[must_use]
    pub fn review_count(&self) -> u32 {
        self.review_count.unwrap_or_default()
    }

    #[must_use]
    pub fn overview_href(&self) -> String {
        format!("/overview/{}", self.product_id)
    }

    #[must_use]
    pub fn formatted_price(&self) -> String {
        format_usd(self.price)
    }

    #[must_use]
    pub fn formatted_labeled_price(&self) -> Option<String> {
        self.labeled_price.map(format_usd)
    }
}

/// Formats an amount as US dollars with two fraction digits and thousands
/// separators, e.g. `$1,234.50`. Non-finite amounts render as `$0.00`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_owned();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let (dollars, fraction) = (cents / 100, cents % 100);

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, labeled_price: Option<f64>) -> ProductView {
        ProductView {
            product_id: "p-1".to_owned(),
            name: "Lamp".to_owned(),
            price,
            labeled_price,
            ..Default::default()
        }
    }

    #[test]
    fn discount_from_labeled_price() {
        assert_eq!(product(80.0, Some(100.0)).discount_percentage(), 20);
        assert_eq!(product(66.0, Some(99.0)).discount_percentage(), 33);
        assert_eq!(product(0.0, Some(10.0)).discount_percentage(), 100);
    }

    #[test]
    fn no_discount_without_higher_labeled_price() {
        assert_eq!(product(80.0, None).discount_percentage(), 0);
        assert_eq!(product(100.0, Some(100.0)).discount_percentage(), 0);
        assert_eq!(product(120.0, Some(100.0)).discount_percentage(), 0);
        assert_eq!(product(0.0, Some(0.0)).discount_percentage(), 0);
        assert!(!product(120.0, Some(100.0)).has_discount());
    }

    #[test]
    fn average_rating_rounds_to_one_decimal() {
        let mut p = product(1.0, None);
        p.ratings = Some(vec![4.0, 5.0, 3.0]);
        assert_eq!(p.average_rating_label(), "4.0");

        p.ratings = Some(vec![4.0, 5.0, 5.0]);
        assert_eq!(p.average_rating_label(), "4.7");
        assert_eq!(p.filled_stars(), 5);

        p.ratings = Some(vec![3.0, 4.0]);
        assert_eq!(p.average_rating_label(), "3.5");
        assert_eq!(p.filled_stars(), 4);
    }

    #[test]
    fn missing_ratings_are_neutral() {
        let mut p = product(1.0, None);
        assert_eq!(p.average_rating_label(), "0.0");
        assert_eq!(p.filled_stars(), 0);

        p.ratings = Some(Vec::new());
        assert_eq!(p.average_rating_label(), "0.0");
    }

    #[test]
    fn images_and_links() {
        let mut p = product(1.0, None);
        assert_eq!(p.primary_image(), None);
        assert_eq!(p.hover_image(), None);

        p.images = vec!["/a.webp".to_owned(), "/b.webp".to_owned()];
        assert_eq!(p.primary_image(), Some("/a.webp"));
        assert_eq!(p.hover_image(), Some("/b.webp"));
        assert_eq!(p.overview_href(), "/overview/p-1");
        assert_eq!(p.category_label(), "Category");
        assert_eq!(p.review_count(), 0);
    }

    #[test]
    fn stock() {
        let mut p = product(1.0, None);
        assert!(!p.in_stock());
        p.stock = 2;
        assert!(p.in_stock());
    }

    #[test]
    fn formats_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(5.0), "$5.00");
        assert_eq!(format_usd(19.999), "$20.00");
        assert_eq!(format_usd(999.5), "$999.50");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(-5.0), "-$5.00");
        assert_eq!(format_usd(-0.001), "$0.00");
        assert_eq!(format_usd(f64::NAN), "$0.00");
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let p: ProductView = serde_json::from_value(serde_json::json!({
            "productId": "SKU-9",
            "name": "Chair",
            "price": 80.0,
            "labeledPrice": 100.0,
            "images": ["/chair.webp"],
            "ratings": [4, 5, 3],
            "stock": 0,
            "isNew": true,
            "reviewCount": 12
        }))
        .unwrap();

        assert_eq!(p.product_id, "SKU-9");
        assert_eq!(p.discount_percentage(), 20);
        assert_eq!(p.average_rating_label(), "4.0");
        assert!(p.is_new);
        assert!(!p.is_featured);
        assert!(!p.in_stock());
        assert_eq!(p.review_count(), 12);
        assert_eq!(p.brand, None);
    }
}
