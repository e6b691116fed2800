// Seed data
// Built-in starter catalog plus optional loading from a TOML file

use serde::Deserialize;

use super::id;
use super::types::Product;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// The built-in starter catalog (ten products)
pub fn default_products() -> Vec<Product> {
    [
        ("Laptop", "Electronics", "Powerful gaming laptop", 1200.0, 5, 4.5),
        ("Smartphone", "Electronics", "Flagship smartphone", 800.0, 10, 4.7),
        ("Headphones", "Accessories", "Wireless noise-cancelling headphones", 150.0, 20, 4.3),
        ("Keyboard", "Peripherals", "Mechanical keyboard", 100.0, 15, 4.6),
        ("Mouse", "Peripherals", "Gaming mouse", 50.0, 25, 4.4),
        ("Monitor", "Electronics", "27-inch 4K monitor", 350.0, 7, 4.8),
        ("External drive", "Storage", "1TB external SSD", 120.0, 12, 4.5),
        ("Router", "Networking", "Wi-Fi 6 router", 200.0, 8, 4.2),
        ("Printer", "Peripherals", "Laser printer", 250.0, 4, 4.1),
        ("Flash drive", "Storage", "64GB USB 3.0 stick", 15.0, 50, 4.0),
    ]
    .into_iter()
    .map(|(name, category, description, price, stock, rating)| Product {
        id: id::generate(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        price,
        stock,
        rating: Some(rating),
        image: Some(PLACEHOLDER_IMAGE.to_string()),
    })
    .collect()
}

/// Seed file layout: a `[[products]]` table per record
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Vec<SeedProduct>,
}

#[derive(Debug, Deserialize)]
struct SeedProduct {
    name: String,
    category: String,
    description: String,
    price: f64,
    stock: i64,
    rating: Option<f64>,
    image: Option<String>,
}

/// Load seed records from a TOML file
pub fn load(path: &str) -> Result<Vec<Product>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read seed file '{path}': {e}"))?;
    parse(&content).map_err(|e| format!("Failed to parse seed file '{path}': {e}"))
}

fn parse(content: &str) -> Result<Vec<Product>, String> {
    let seed: SeedFile = toml::from_str(content).map_err(|e| e.to_string())?;
    Ok(seed
        .products
        .into_iter()
        .map(|p| Product {
            id: id::generate(),
            name: p.name.trim().to_string(),
            category: p.category.trim().to_string(),
            description: p.description.trim().to_string(),
            price: p.price,
            stock: p.stock,
            rating: p.rating,
            image: p.image,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_is_complete() {
        let products = default_products();
        assert_eq!(products.len(), 10);
        for product in &products {
            assert_eq!(product.id.len(), id::ID_LEN);
            assert!(!product.name.is_empty());
            assert!(!product.category.is_empty());
            assert!(!product.description.is_empty());
            assert!(product.price > 0.0);
            assert!(product.stock >= 0);
        }
    }

    #[test]
    fn test_parse_seed_file() {
        let products = parse(
            r#"
            [[products]]
            name = "  Webcam "
            category = "Peripherals"
            description = "1080p webcam"
            price = 60.0
            stock = 9
            rating = 4.2

            [[products]]
            name = "Desk lamp"
            category = "Office"
            description = "LED desk lamp"
            price = 25.5
            stock = 30
            "#,
        )
        .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Webcam");
        assert_eq!(products[0].rating, Some(4.2));
        assert_eq!(products[1].rating, None);
        assert_eq!(products[1].image, None);
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(parse("[[products]]\nname = 3").is_err());
    }

    #[test]
    fn test_parse_empty_file_gives_empty_catalog() {
        assert!(parse("").unwrap().is_empty());
    }
}
