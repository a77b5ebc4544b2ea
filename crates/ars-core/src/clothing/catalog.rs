use super::{Category, ClothingItem};

fn catalog_item(
    id: &str,
    name: &str,
    category: Category,
    image_url: &str,
    brand: &str,
    price: f64,
) -> ClothingItem {
    ClothingItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        image_url: image_url.to_string(),
        brand: Some(brand.to_string()),
        price: Some(price),
    }
}

/// Popular items offered on the clothing selection screen.
pub fn popular_clothing() -> Vec<ClothingItem> {
    vec![
        catalog_item(
            "1",
            "Camisa Social Branca",
            Category::Shirt,
            "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=300&h=400&fit=crop",
            "Style Co.",
            89.90,
        ),
        catalog_item(
            "2",
            "Vestido Floral Verão",
            Category::Dress,
            "https://images.unsplash.com/photo-1572804013309-59a88b7e92f1?w=300&h=400&fit=crop",
            "Fashion Plus",
            159.90,
        ),
        catalog_item(
            "3",
            "Jaqueta Jeans Clássica",
            Category::Jacket,
            "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=300&h=400&fit=crop",
            "Denim Co.",
            199.90,
        ),
        catalog_item(
            "4",
            "Calça Jeans Skinny",
            Category::Pants,
            "https://images.unsplash.com/photo-1542272604-787c3835535d?w=300&h=400&fit=crop",
            "Urban Style",
            129.90,
        ),
    ]
}

pub fn find_catalog_item(id: &str) -> Option<ClothingItem> {
    popular_clothing().into_iter().find(|item| item.id == id)
}
