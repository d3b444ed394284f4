//! The seeded default catalog.

use vitrina_core::{Category, Price, Product, ProductId};

struct Seed {
    id: &'static str,
    name: &'static str,
    price: u32,
    image: &'static str,
    category: Category,
    description: &'static str,
    featured: bool,
    brand: &'static str,
}

const SEEDS: &[Seed] = &[
    // Perfumes
    Seed {
        id: "p1",
        name: "Perfume Chanel No. 5",
        price: 8_500,
        image: "https://images.pexels.com/photos/965990/pexels-photo-965990.jpeg",
        category: Category::Perfumes,
        description: "Icónico perfume femenino con notas florales elegantes",
        featured: true,
        brand: "Chanel",
    },
    Seed {
        id: "p2",
        name: "Perfume Dior Sauvage",
        price: 7_200,
        image: "https://images.pexels.com/photos/1961792/pexels-photo-1961792.jpeg",
        category: Category::Perfumes,
        description: "Fragancia masculina fresca y sofisticada",
        featured: true,
        brand: "Dior",
    },
    Seed {
        id: "p3",
        name: "Perfume Versace Eros",
        price: 6_800,
        image: "https://images.pexels.com/photos/1055691/pexels-photo-1055691.jpeg",
        category: Category::Perfumes,
        description: "Perfume masculino seductor y vibrante",
        featured: false,
        brand: "Versace",
    },
    // Tecnología
    Seed {
        id: "t1",
        name: "iPhone 15 Pro Max",
        price: 85_000,
        image: "https://images.pexels.com/photos/788946/pexels-photo-788946.jpeg",
        category: Category::Tecnologia,
        description: "El último iPhone con cámara profesional y chip A17 Pro",
        featured: true,
        brand: "Apple",
    },
    Seed {
        id: "t2",
        name: "Samsung Galaxy S24 Ultra",
        price: 78_000,
        image: "https://images.pexels.com/photos/1034649/pexels-photo-1034649.jpeg",
        category: Category::Tecnologia,
        description: "Smartphone Android premium con S Pen incluido",
        featured: true,
        brand: "Samsung",
    },
    Seed {
        id: "t3",
        name: "MacBook Pro 14\"",
        price: 125_000,
        image: "https://images.pexels.com/photos/18105/pexels-photo.jpg",
        category: Category::Tecnologia,
        description: "Laptop profesional con chip M3 Pro para máximo rendimiento",
        featured: false,
        brand: "Apple",
    },
    Seed {
        id: "t4",
        name: "Smart TV Samsung 55\"",
        price: 45_000,
        image: "https://images.pexels.com/photos/1201996/pexels-photo-1201996.jpeg",
        category: Category::Tecnologia,
        description: "Televisión 4K UHD con tecnología QLED",
        featured: false,
        brand: "Samsung",
    },
    // Electrodomésticos
    Seed {
        id: "e1",
        name: "Refrigerador LG 18 pies",
        price: 65_000,
        image: "https://images.pexels.com/photos/2343468/pexels-photo-2343468.jpeg",
        category: Category::Electrodomesticos,
        description: "Refrigerador de dos puertas con dispensador de agua",
        featured: true,
        brand: "LG",
    },
    Seed {
        id: "e2",
        name: "Lavadora Whirlpool 17kg",
        price: 35_000,
        image: "https://images.pexels.com/photos/4239091/pexels-photo-4239091.jpeg",
        category: Category::Electrodomesticos,
        description: "Lavadora automática de carga superior",
        featured: false,
        brand: "Whirlpool",
    },
    Seed {
        id: "e3",
        name: "Aire Acondicionado Inverter 12000 BTU",
        price: 28_000,
        image: "https://images.pexels.com/photos/1638298/pexels-photo-1638298.jpeg",
        category: Category::Electrodomesticos,
        description: "Aire acondicionado inverter eficiente y silencioso",
        featured: false,
        brand: "Carrier",
    },
    // Relojes
    Seed {
        id: "r1",
        name: "Apple Watch Series 9",
        price: 32_000,
        image: "https://images.pexels.com/photos/437037/pexels-photo-437037.jpeg",
        category: Category::Relojes,
        description: "Smartwatch con GPS y monitor de salud avanzado",
        featured: true,
        brand: "Apple",
    },
    Seed {
        id: "r2",
        name: "Rolex Submariner",
        price: 450_000,
        image: "https://images.pexels.com/photos/190819/pexels-photo-190819.jpeg",
        category: Category::Relojes,
        description: "Reloj de lujo suizo resistente al agua",
        featured: false,
        brand: "Rolex",
    },
    Seed {
        id: "r3",
        name: "Casio G-Shock",
        price: 8_500,
        image: "https://images.pexels.com/photos/277390/pexels-photo-277390.jpeg",
        category: Category::Relojes,
        description: "Reloj deportivo resistente a golpes",
        featured: false,
        brand: "Casio",
    },
];

/// The catalog the store opens with before an admin edits anything.
#[must_use]
pub fn default_catalog() -> Vec<Product> {
    SEEDS
        .iter()
        .map(|seed| Product {
            id: ProductId::new(seed.id),
            name: seed.name.to_owned(),
            price: Price::from_pesos(seed.price),
            image: seed.image.to_owned(),
            category: seed.category,
            description: seed.description.to_owned(),
            in_stock: true,
            featured: seed.featured,
            brand: Some(seed.brand.to_owned()),
            rating: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let products = default_catalog();
        assert_eq!(products.len(), 13);
        assert!(products.iter().all(|p| p.in_stock));
        assert!(
            Category::ALL
                .iter()
                .all(|c| products.iter().any(|p| p.category == *c))
        );
    }

    #[test]
    fn test_default_ids_are_unique() {
        let products = default_catalog();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }
}
