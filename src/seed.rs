//! Fixture data for the demo binary and the integration tests: a small
//! handmade-goods catalog with a purchase history.

use chrono::NaiveDate;

use crate::models::product::NewProduct;
use crate::models::transaction::NewTransaction;
use crate::models::user::NewUser;
use crate::store::Store;

const USERS: [(&str, &str, &str, &str, &str, &str, &str); 4] = [
    (
        "Thea",
        "Verdonk",
        "Klaverstraat 24, 7555 AA Hoorn, Nederland",
        "Klaverstraat 24, 7555 AA Hoorn, Nederland",
        "Bitcoin",
        "0655324444576",
        "t.verdonk@nomail.com",
    ),
    (
        "Rob",
        "Stiewert",
        "Maaskant 320, 1055 KM Apeldoorn, Nederland",
        "Mozartlaan 5, 1056 BA Apeldoorn, Nederland",
        "Ideal",
        "0653874625576",
        "rob.stiewert@spamail.com",
    ),
    (
        "Karen",
        "Jansen",
        "Brusselstraat 23, 3045 DB Assen, Nederland",
        "Brusselstraat 23, 3045 DB Assen, Nederland",
        "Ideal",
        "0452786224576",
        "karen@jansen.org",
    ),
    (
        "Sara",
        "van Oosten",
        "Kanaalweg 4, 9934 RT Harlingen, Nederland",
        "Mehrstrasse 142, 39645 Hamburg, Duitsland",
        "Cash",
        "0555837653333",
        "svoosten@gmail.com",
    ),
];

const TAGS: [&str; 11] = [
    "poncho", "wool", "kimono", "cotton", "scarf", "ring", "metal", "vase", "socks", "shoes",
    "canvas",
];

const PRODUCTS: [(&str, &str, i64, i64); 6] = [
    ("Handmade Poncho", "Handmade Wool Poncho for Men", 7500, 34),
    ("Japanese Kimono", "Cotton Kimono for Women", 8800, 15),
    (
        "Painted Shoes",
        "Hand Painted Canvas Shoes for Women",
        4500,
        22,
    ),
    ("Scarf Ring", "Handmade Infinity Oval Scarf Ring", 12500, 5),
    (
        "Merino Wool Socks",
        "Hand knitted- Merino wool- Medium size 5-6",
        1500,
        30,
    ),
    ("Painted Vase", "Hand-Painted Floral Vase", 1500, 22),
];

const PRODUCT_TAGS: [(i64, i64); 12] = [
    (1, 1),
    (1, 2),
    (2, 3),
    (2, 4),
    (3, 10),
    (3, 11),
    (4, 5),
    (4, 6),
    (4, 7),
    (5, 9),
    (5, 2),
    (6, 8),
];

// (product_id, user_id, amount, price_in_cents, (y, m, d), payment_method)
const TRANSACTIONS: [(i64, i64, i64, i64, (i32, u32, u32), &str); 5] = [
    (2, 3, 1, 8800, (2022, 2, 12), "Ideal"),
    (3, 3, 1, 4500, (2022, 5, 23), "Ideal"),
    (4, 4, 2, 25000, (2022, 1, 4), "Bitcoin"),
    (6, 3, 1, 1500, (2022, 1, 4), "Cash"),
    (4, 1, 1, 12500, (2022, 3, 15), "Bitcoin"),
];

const USER_PRODUCTS: [(i64, i64); 5] = [(3, 2), (3, 3), (4, 4), (3, 6), (1, 4)];

pub async fn populate(store: &Store) -> Result<(), sqlx::Error> {
    let users: Vec<NewUser> = USERS
        .iter()
        .map(
            |&(first_name, last_name, shipping, billing, payment_method, phone, email)| NewUser {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                shipping_address: shipping.to_string(),
                billing_address: billing.to_string(),
                payment_method: payment_method.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
            },
        )
        .collect();
    store.insert_users(&users).await?;

    store.insert_tags(&TAGS).await?;

    let products: Vec<NewProduct> = PRODUCTS
        .iter()
        .map(|&(name, description, price_in_cents, amount_in_stock)| NewProduct {
            name: name.to_string(),
            description: description.to_string(),
            price_in_cents,
            amount_in_stock,
        })
        .collect();
    store.insert_products(&products).await?;

    store.insert_product_tags(&PRODUCT_TAGS).await?;

    let transactions: Vec<NewTransaction> = TRANSACTIONS
        .iter()
        .map(
            |&(product_id, user_id, amount, price_in_cents, (y, m, d), payment_method)| {
                NewTransaction {
                    product_id,
                    user_id,
                    amount,
                    price_in_cents,
                    trans_date: NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid"),
                    payment_method: payment_method.to_string(),
                }
            },
        )
        .collect();
    store.insert_transactions(&transactions).await?;

    store.insert_user_products(&USER_PRODUCTS).await?;

    Ok(())
}
