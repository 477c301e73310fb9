//! Status record: active and sold flags plus asking price

use bytes::{Buf, BufMut};

use crate::car::CarRecord;
use crate::error::Result;

use super::check_len;

/// One 16-byte entry of `cars_status.dat`
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRecord {
    pub car_id: i32,
    pub active: bool,
    pub is_sold: bool,
    pub sell_price: f32,
}

impl StatusRecord {
    /// Encoded size in bytes
    pub const SIZE: usize = 16;

    /// Project the Status fields out of a logical record
    ///
    /// `active` is always written as 1.
    pub fn from_car(car: &CarRecord) -> Self {
        Self {
            car_id: car.car_id.raw(),
            active: true,
            is_sold: car.is_sold,
            sell_price: car.sell_price,
        }
    }

    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        let mut buf = &mut out[..];

        buf.put_i32_le(self.car_id);
        buf.put_i32_le(i32::from(self.active));
        buf.put_i32_le(i32::from(self.is_sold));
        buf.put_f32_le(self.sell_price);

        out
    }

    /// Decode; only an `is_sold` of exactly 1 counts as sold
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        check_len("Status", bytes, Self::SIZE)?;
        let mut buf = bytes;

        let car_id = buf.get_i32_le();
        let active = buf.get_i32_le() != 0;
        let is_sold = buf.get_i32_le() == 1;
        let sell_price = buf.get_f32_le();

        Ok(Self {
            car_id,
            active,
            is_sold,
            sell_price,
        })
    }
}
