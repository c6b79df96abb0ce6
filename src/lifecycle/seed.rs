//! Default price list and supplies of a new shop.

use crate::model::Category;
use rust_decimal::Decimal;

/// `(garment type, price in pesos, category)`
const PRICE_LIST: [(&str, i64, Category); 35] = [
    ("camisa casual", 25, Category::Casual),
    ("pantalón jean", 35, Category::Casual),
    ("short", 20, Category::Casual),
    ("blusa", 22, Category::Casual),
    ("top", 15, Category::Casual),
    ("camisa formal", 30, Category::Formal),
    ("pantalón de vestir", 40, Category::Formal),
    ("traje completo", 80, Category::Formal),
    ("corbata", 10, Category::Formal),
    ("chaleco", 25, Category::Formal),
    ("uniforme deportivo", 35, Category::Sportswear),
    ("short deportivo", 18, Category::Sportswear),
    ("franela deportiva", 20, Category::Sportswear),
    ("leggings", 22, Category::Sportswear),
    ("sudadera", 45, Category::Sportswear),
    ("calzoncillos", 8, Category::Underwear),
    ("panties", 6, Category::Underwear),
    ("sostén", 10, Category::Underwear),
    ("camiseta interior", 7, Category::Underwear),
    ("pijama", 30, Category::Underwear),
    ("sábana individual", 50, Category::Bedding),
    ("sábana doble", 70, Category::Bedding),
    ("funda de almohada", 15, Category::Bedding),
    ("cobija", 120, Category::Bedding),
    ("edredón", 150, Category::Bedding),
    ("toalla de baño", 25, Category::Linens),
    ("toalla de mano", 12, Category::Linens),
    ("toalla de playa", 40, Category::Linens),
    ("mantel individual", 20, Category::Linens),
    ("mantel grande", 45, Category::Linens),
    ("uniforme escolar", 35, Category::Uniforms),
    ("uniforme médico", 45, Category::Uniforms),
    ("uniforme de trabajo", 40, Category::Uniforms),
    ("delantal", 15, Category::Uniforms),
    ("bata", 35, Category::Uniforms),
];

/// `(name, quantity, low-stock threshold)`
pub const SUPPLIES: [(&str, u32, u32); 3] = [
    ("detergente", 50, 5),
    ("suavizante", 40, 5),
    ("bolsas", 200, 10),
];

pub fn default_prices() -> Vec<(&'static str, Decimal, Category)> {
    PRICE_LIST
        .iter()
        .map(|&(garment, pesos, category)| (garment, Decimal::from(pesos), category))
        .collect()
}
