use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// One generated row, matching the dashboard's expected columns.
#[derive(Serialize)]
struct SampleOrder {
    order_id: u32,
    order_date: String,
    pizza_name: &'static str,
    pizza_size: &'static str,
    unit_price: f64,
    pizza_ingredients: &'static str,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `0..bound`.
    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// Pizza menu: name, base price, ingredients joined by ", ".
const MENU: [(&str, f64, &str); 6] = [
    (
        "The Hawaiian Pizza",
        10.5,
        "Sliced Ham, Pineapple, Mozzarella Cheese",
    ),
    (
        "The Pepperoni Pizza",
        9.75,
        "Mozzarella Cheese, Pepperoni",
    ),
    (
        "The Barbecue Chicken Pizza",
        12.75,
        "Barbecued Chicken, Red Peppers, Green Peppers, Tomatoes, Red Onions, Barbecue Sauce",
    ),
    (
        "The Margherita Pizza",
        9.5,
        "Tomatoes, Mozzarella Cheese, Basil",
    ),
    (
        "The Four Cheese Pizza",
        11.25,
        "Ricotta Cheese, Gorgonzola Piccante Cheese, Mozzarella Cheese, Parmigiano Reggiano Cheese",
    ),
    (
        "The Spinach Supreme Pizza",
        12.0,
        "Spinach, Red Onions, Pepperoni, Tomatoes, Artichokes, Mozzarella Cheese",
    ),
];

/// Size labels and their price multipliers.
const SIZES: [(&str, f64); 4] = [("S", 0.8), ("M", 1.0), ("L", 1.25), ("XL", 1.5)];

fn main() {
    let mut rng = SimpleRng::new(42);
    let year_start = NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid date");

    let output_path = "pizza_sales.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let n_orders = 500;
    for order_id in 0..n_orders {
        let (pizza_name, base_price, pizza_ingredients) = MENU[rng.next_usize(MENU.len())];
        let (pizza_size, multiplier) = SIZES[rng.next_usize(SIZES.len())];

        // Quarter-dollar price points, like the real menu.
        let unit_price = (base_price * multiplier * 4.0).round() / 4.0;

        let date = year_start + Duration::days(rng.next_usize(365) as i64);
        let timestamp = date
            .and_hms_opt(
                11 + rng.next_usize(11) as u32,
                rng.next_usize(60) as u32,
                rng.next_usize(60) as u32,
            )
            .expect("valid time");

        // Deliberately mixed date formats, the way the real export looks.
        let order_date = match rng.next_f64() {
            r if r < 0.5 => timestamp.format("%d/%m/%Y %H:%M:%S").to_string(),
            r if r < 0.8 => timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            _ => timestamp.format("%d/%m/%Y").to_string(),
        };

        writer
            .serialize(SampleOrder {
                order_id,
                order_date,
                pizza_name,
                pizza_size,
                unit_price,
                pizza_ingredients,
            })
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_orders} orders to {output_path}");
}
