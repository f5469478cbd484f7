use serde::{Deserialize, Serialize};

/// Product category. Labels are the Indonesian storefront vocabulary the
/// downstream dashboards filter on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Category {
    Elektronik,
    Fashion,
    #[serde(rename = "Rumah Tangga")]
    #[strum(serialize = "Rumah Tangga")]
    RumahTangga,
    Kecantikan,
    #[serde(rename = "Makanan & Minuman")]
    #[strum(serialize = "Makanan & Minuman")]
    MakananMinuman,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Elektronik,
        Category::Fashion,
        Category::RumahTangga,
        Category::Kecantikan,
        Category::MakananMinuman,
    ];
}

/// One row of the `products` table. Prices are integer rupiah; ratings are
/// rounded to two decimals at generation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub category: Category,
    pub price: u32,
    pub rating: f32,
}

impl Product {
    pub const CSV_HEADER: [&'static str; 5] =
        ["product_id", "name", "category", "price", "rating"];

    pub fn id_for(index: usize) -> String {
        format!("P{:04}", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_are_zero_padded() {
        assert_eq!(Product::id_for(7), "P0007");
    }

    #[test]
    fn multi_word_categories_render_with_spaces() {
        assert_eq!(Category::RumahTangga.to_string(), "Rumah Tangga");
        assert_eq!(Category::MakananMinuman.to_string(), "Makanan & Minuman");
    }
}
