//! First-run defaults: the built-in accounts and the default menu catalog.

use crate::error::Result;
use crate::models::{MenuItem, Role, User};
use crate::store::{keys, Store};

/// Seeds absent collections. Existing data is never touched.
pub fn apply(store: &Store) -> Result<()> {
    if !store.has_key(keys::USERS)? {
        store.put_collection(keys::USERS, &default_users())?;
    }
    if !store.has_key(keys::MENU_ITEMS)? {
        store.put_collection(keys::MENU_ITEMS, &default_menu_items())?;
    }
    Ok(())
}

fn default_users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "Restaurant Owner".into(),
            email: "owner@karunadu.com".into(),
            password: "owner123".into(),
            role: Role::Owner,
        },
        User {
            id: "2".into(),
            name: "Staff Member".into(),
            email: "staff@karunadu.com".into(),
            password: "staff123".into(),
            role: Role::Staff,
        },
    ]
}

fn item(id: &str, name: &str, description: &str, price: f64, category: &str, image: &str) -> MenuItem {
    MenuItem {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
        category: category.into(),
        image: image.into(),
    }
}

pub fn default_menu_items() -> Vec<MenuItem> {
    vec![
        item(
            "1",
            "Masala Dosa",
            "Crispy rice crepe filled with spiced potato, served with sambar and chutney",
            120.0,
            "South Indian",
            "https://images.unsplash.com/photo-1589301760014-d929f3979dbc?w=1000&q=80",
        ),
        item(
            "2",
            "Idli Sambar",
            "Steamed rice cakes served with lentil soup and coconut chutney",
            80.0,
            "South Indian",
            "https://images.unsplash.com/photo-1589301761974?w=1000&q=80",
        ),
        item(
            "3",
            "Mysore Bonda",
            "Deep-fried fluffy snack made with fermented batter",
            60.0,
            "South Indian",
            "https://cdn.pixabay.com/photo/2020/06/30/14/37/bonda-5356383_1280.jpg",
        ),
        item(
            "4",
            "Puri Bhaji",
            "Deep-fried bread served with spiced potato curry",
            90.0,
            "South Indian",
            "https://cdn.pixabay.com/photo/2017/09/09/12/09/india-2731817_1280.jpg",
        ),
        item(
            "5",
            "South Indian Thali",
            "Complete meal with rice, sambar, rasam, vegetables, and papad",
            220.0,
            "South Indian",
            "https://cdn.pixabay.com/photo/2015/05/31/13/59/vegetables-791892_1280.jpg",
        ),
        item(
            "6",
            "Vanilla Ice Cream",
            "Classic vanilla bean ice cream",
            70.0,
            "Ice Cream",
            "https://cdn.pixabay.com/photo/2018/08/16/22/59/ice-cream-3611698_1280.jpg",
        ),
        item(
            "7",
            "Chocolate Ice Cream",
            "Rich chocolate ice cream with chocolate chips",
            80.0,
            "Ice Cream",
            "https://cdn.pixabay.com/photo/2016/03/05/19/02/abstract-1238247_1280.jpg",
        ),
        item(
            "8",
            "Mango Ice Cream",
            "Seasonal mango flavored ice cream",
            90.0,
            "Ice Cream",
            "https://cdn.pixabay.com/photo/2017/05/02/18/20/ice-2278607_1280.jpg",
        ),
        item(
            "9",
            "Masala Chai",
            "Traditional Indian spiced tea",
            40.0,
            "Beverages",
            "https://cdn.pixabay.com/photo/2019/01/23/16/12/masala-3949746_1280.jpg",
        ),
        item(
            "10",
            "Filter Coffee",
            "South Indian style filter coffee with chicory",
            50.0,
            "Beverages",
            "https://cdn.pixabay.com/photo/2017/04/25/08/02/coffee-beans-2258839_1280.jpg",
        ),
        item(
            "11",
            "Fresh Lime Soda",
            "Refreshing sweet and salty lime soda",
            60.0,
            "Beverages",
            "https://cdn.pixabay.com/photo/2018/04/04/10/11/lime-3289963_1280.jpg",
        ),
        item(
            "12",
            "Mango Lassi",
            "Sweet yogurt drink with mango pulp",
            70.0,
            "Beverages",
            "https://cdn.pixabay.com/photo/2019/05/04/09/33/smoothie-4177519_1280.jpg",
        ),
    ]
}
