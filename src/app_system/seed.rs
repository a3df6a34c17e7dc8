//! Demo catalog loaded at startup when seeding is enabled.

use crate::domain::{Location, MenuItem, Restaurant, Role, SizeVariant, User};

pub fn demo_users() -> Vec<User> {
    vec![
        User::new("admin", Role::Admin).with_id("u1").with_password("adminpassword"),
        User::new("burgerhub", Role::Vendor)
            .with_id("u2")
            .with_password("vendorpassword")
            .with_restaurant("r1"),
        User::new("brewbar", Role::Vendor)
            .with_id("u3")
            .with_password("vendorpassword")
            .with_restaurant("r2"),
        User::new("alice", Role::Customer).with_id("u4").with_password("customerpassword"),
    ]
}

pub fn demo_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new("r1", "Burger Hub", "Food Court A", "u2").with_menu(vec![
            MenuItem::new("m1", "Classic Burger", 10.0, "Mains")
                .with_description("Beef patty, cheddar, pickles")
                .with_image("https://picsum.photos/seed/burger/300"),
            MenuItem::new("m2", "Fries", 3.5, "Sides")
                .with_description("Skin-on, sea salt")
                .with_sizes(vec![
                    SizeVariant { name: "Regular".into(), price: 3.5 },
                    SizeVariant { name: "Large".into(), price: 4.5 },
                ]),
            MenuItem::new("m3", "Onion Rings", 4.0, "Sides"),
        ]),
        Restaurant::new("r2", "Brew Bar", "Food Court B", "u3").with_menu(vec![
            MenuItem::new("m4", "Latte", 4.0, "Coffee")
                .with_sizes(vec![
                    SizeVariant { name: "Regular".into(), price: 4.0 },
                    SizeVariant { name: "Large".into(), price: 5.0 },
                ])
                .with_temperature(0.0, 0.5),
            MenuItem::new("m5", "Croissant", 3.0, "Bakery"),
        ]),
    ]
}

pub fn demo_locations() -> Vec<Location> {
    vec![Location::new("Food Court A"), Location::new("Food Court B")]
}
