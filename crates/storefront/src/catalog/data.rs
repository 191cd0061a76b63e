//! Built-in product list.

use demo_smoke_core::{Price, ProductCategory};

use super::Product;

#[allow(clippy::too_many_lines)]
pub(super) fn products() -> Vec<Product> {
    vec![
        // Vapes
        Product::new(
            "vape-001",
            "Premium Disposable Vape - Blue Razz",
            Price::from_cents(2499),
            ProductCategory::Vapes,
        )
        .with_description(
            "High-quality disposable vape with premium blue raspberry flavor. \
             Approximately 2000 puffs per device.",
        )
        .with_image("/images/Juicy_bar_Jb_5000_disposable_vape__02616.PNG")
        .featured()
        .with_spec("Puff Count", "~2000")
        .with_spec("Nicotine Strength", "50mg")
        .with_spec("Battery", "Built-in"),
        Product::new(
            "vape-002",
            "Refillable Pod System",
            Price::from_cents(4999),
            ProductCategory::Vapes,
        )
        .with_description(
            "Sleek refillable pod system with adjustable airflow and long-lasting battery life.",
        )
        .with_image("/images/Refillable Vape.PNG")
        .featured()
        .with_spec("Battery", "1200mAh")
        .with_spec("Pod Capacity", "2ml")
        .with_spec("Charging", "USB-C"),
        Product::new(
            "vape-003",
            "Box Mod Starter Kit",
            Price::from_cents(8999),
            ProductCategory::Vapes,
        )
        .with_description("Professional-grade box mod with tank, perfect for experienced users.")
        .with_image("/images/Box mod starter kit.PNG")
        .with_spec("Wattage", "5-80W")
        .with_spec("Battery", "Dual 18650")
        .with_spec("Tank Capacity", "5ml"),
        // Glass
        Product::new(
            "glass-001",
            "Handblown Glass Water Pipe - 12\"",
            Price::from_cents(12_999),
            ProductCategory::Glass,
        )
        .with_description(
            "Beautiful handcrafted glass water pipe with intricate design and smooth draw.",
        )
        .with_image("/images/Bong.PNG")
        .featured()
        .with_spec("Height", "12 inches")
        .with_spec("Material", "Borosilicate Glass")
        .with_spec("Joint Size", "14mm"),
        Product::new(
            "glass-002",
            "Mini Bubbler - Compact Design",
            Price::from_cents(3999),
            ProductCategory::Glass,
        )
        .with_description(
            "Portable mini bubbler perfect for on-the-go use. Fits comfortably in your hand.",
        )
        .with_image("/images/Mini bubbler.Png")
        .with_spec("Height", "4 inches")
        .with_spec("Material", "Borosilicate Glass")
        .with_spec("Type", "Bubbler"),
        Product::new(
            "glass-003",
            "Artistic Glass Spoon Pipe",
            Price::from_cents(2499),
            ProductCategory::Glass,
        )
        .with_description(
            "Unique artistic glass spoon pipe with vibrant colors and comfortable grip.",
        )
        .with_image("/images/Colorful handpipe.Png")
        .with_spec("Length", "4 inches")
        .with_spec("Material", "Hand-blown Glass")
        .with_spec("Style", "Spoon Pipe"),
        // Accessories
        Product::new(
            "acc-001",
            "Premium Herb Grinder",
            Price::from_cents(3499),
            ProductCategory::Accessories,
        )
        .with_description("Aircraft-grade aluminum grinder with sharp teeth and smooth operation.")
        .with_image("/images/Metal-Grinder_7.png")
        .featured()
        .with_spec("Material", "Aircraft Aluminum")
        .with_spec("Diameter", "2.5 inches")
        .with_spec("Chambers", "4-piece"),
        Product::new(
            "acc-002",
            "Glass Storage Jar Set",
            Price::from_cents(1999),
            ProductCategory::Accessories,
        )
        .with_description(
            "Airtight glass storage jars to keep your herbs fresh. Set of 3 different sizes.",
        )
        .with_image("/images/Weed storage jars.jpg")
        .with_spec("Material", "UV-resistant Glass")
        .with_spec("Sizes", "Small, Medium, Large")
        .with_spec("Features", "Airtight Seal"),
        // Papers & Wraps
        Product::new(
            "paper-001",
            "Organic Hemp Papers - King Size",
            Price::from_cents(399),
            ProductCategory::Papers,
        )
        .with_description(
            "Premium organic hemp rolling papers with natural gum. Slow burning and pure taste.",
        )
        .with_image("/images/RAW rolling papers.png")
        .with_spec("Material", "Organic Hemp")
        .with_spec("Size", "King Size")
        .with_spec("Count", "32 papers"),
        Product::new(
            "paper-002",
            "Natural Leaf Wraps",
            Price::from_cents(249),
            ProductCategory::Papers,
        )
        .with_description("All-natural tobacco-free leaf wraps. Smooth burn and natural flavor.")
        .with_image("/images/Backwoods leaf wraps.jpg")
        .with_spec("Material", "Natural Leaf")
        .with_spec("Type", "Tobacco-free")
        .with_spec("Count", "2 wraps"),
        // Lighters
        Product::new(
            "lighter-001",
            "Butane Torch Lighter",
            Price::from_cents(1299),
            ProductCategory::Lighters,
        )
        .with_description(
            "Reliable butane torch lighter with adjustable flame and refillable design.",
        )
        .with_image("/images/bic-slim-lighter-2340_2.jpg")
        .with_spec("Fuel", "Butane")
        .with_spec("Flame Type", "Torch")
        .with_spec("Features", "Refillable, Adjustable"),
        // CBD
        Product::new(
            "cbd-001",
            "CBD Tincture - 1000mg",
            Price::from_cents(7999),
            ProductCategory::Cbd,
        )
        .with_description(
            "High-quality full-spectrum CBD tincture. Third-party lab tested for purity.",
        )
        .with_image("/images/CBD tincature.jpg")
        .featured()
        .with_spec("Strength", "1000mg CBD")
        .with_spec("Type", "Full Spectrum")
        .with_spec("Size", "30ml bottle"),
        Product::new(
            "cbd-002",
            "CBD Gummies - Mixed Berry",
            Price::from_cents(4999),
            ProductCategory::Cbd,
        )
        .with_description("Delicious mixed berry CBD gummies. 25mg per gummy, 20 count bottle.")
        .with_image("/images/CBD gummies.jpg")
        .with_spec("Strength", "25mg per gummy")
        .with_spec("Count", "20 gummies")
        .with_spec("Flavor", "Mixed Berry"),
    ]
}
