//! Basic record: identity and purchase data

use bytes::{Buf, BufMut};

use crate::car::CarRecord;
use crate::error::Result;

use super::{check_len, encode_text, take_text, BRAND_WIDTH, MODEL_WIDTH};

/// One 56-byte entry of `cars_basic.dat`
#[derive(Debug, Clone, PartialEq)]
pub struct BasicRecord {
    pub car_id: i32,
    pub year: i32,
    pub brand: String,
    pub model: String,
    pub odometer: i32,
    pub buy_price: i32,
}

impl BasicRecord {
    /// Encoded size in bytes
    pub const SIZE: usize = 4 + 4 + BRAND_WIDTH + MODEL_WIDTH + 4 + 4;

    /// Project the Basic fields out of a logical record
    pub fn from_car(car: &CarRecord) -> Self {
        Self {
            car_id: car.car_id.raw(),
            year: car.year,
            brand: car.brand.clone(),
            model: car.model.clone(),
            odometer: car.odometer,
            buy_price: car.buy_price,
        }
    }

    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        let mut buf = &mut out[..];

        buf.put_i32_le(self.car_id);
        buf.put_i32_le(self.year);
        buf.put_slice(&encode_text(&self.brand, BRAND_WIDTH));
        buf.put_slice(&encode_text(&self.model, MODEL_WIDTH));
        buf.put_i32_le(self.odometer);
        buf.put_i32_le(self.buy_price);

        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        check_len("Basic", bytes, Self::SIZE)?;
        let mut buf = bytes;

        let car_id = buf.get_i32_le();
        let year = buf.get_i32_le();
        let brand = take_text(&mut buf, BRAND_WIDTH)?;
        let model = take_text(&mut buf, MODEL_WIDTH)?;
        let odometer = buf.get_i32_le();
        let buy_price = buf.get_i32_le();

        Ok(Self {
            car_id,
            year,
            brand,
            model,
            odometer,
            buy_price,
        })
    }
}
