//! Sale record: prices and customer details

use bytes::{Buf, BufMut};

use crate::car::CarRecord;
use crate::error::Result;

use super::{check_len, encode_text, take_text, CUSTOMER_NAME_WIDTH, CUSTOMER_PHONE_WIDTH};

/// One 61-byte entry of `cars_sale.dat`
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub car_id: i32,
    /// Float copy of the Basic record's integer buy price
    pub buy_price: f32,
    pub sell_price: f32,
    pub final_price: f32,
    pub customer_name: String,
    pub customer_phone: String,
}

impl SaleRecord {
    /// Encoded size in bytes
    pub const SIZE: usize = 4 + 4 + 4 + 4 + CUSTOMER_NAME_WIDTH + CUSTOMER_PHONE_WIDTH;

    /// Project the Sale fields out of a logical record
    pub fn from_car(car: &CarRecord) -> Self {
        Self {
            car_id: car.car_id.raw(),
            buy_price: car.buy_price as f32,
            sell_price: car.sell_price,
            final_price: car.final_price,
            customer_name: car.customer_name.clone(),
            customer_phone: car.customer_phone.clone(),
        }
    }

    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        let mut buf = &mut out[..];

        buf.put_i32_le(self.car_id);
        buf.put_f32_le(self.buy_price);
        buf.put_f32_le(self.sell_price);
        buf.put_f32_le(self.final_price);
        buf.put_slice(&encode_text(&self.customer_name, CUSTOMER_NAME_WIDTH));
        buf.put_slice(&encode_text(&self.customer_phone, CUSTOMER_PHONE_WIDTH));

        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        check_len("Sale", bytes, Self::SIZE)?;
        let mut buf = bytes;

        let car_id = buf.get_i32_le();
        let buy_price = buf.get_f32_le();
        let sell_price = buf.get_f32_le();
        let final_price = buf.get_f32_le();
        let customer_name = take_text(&mut buf, CUSTOMER_NAME_WIDTH)?;
        let customer_phone = take_text(&mut buf, CUSTOMER_PHONE_WIDTH)?;

        Ok(Self {
            car_id,
            buy_price,
            sell_price,
            final_price,
            customer_name,
            customer_phone,
        })
    }
}
