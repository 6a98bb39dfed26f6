/*!
status.rs - 6502 processor status register.

Bit layout (for reference):

```text
Bit: 7 6 5 4 3 2 1 0
     N V U B D I Z C
```

  N = NEGATIVE
  V = OVERFLOW
  U = UNUSED (bit 5)
  B = BREAK
  D = DECIMAL (decimal arithmetic itself is not implemented)
  I = INTERRUPT_DISABLE
  Z = ZERO
  C = CARRY
*/

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL           = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const UNUSED            = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

impl Status {
    #[inline]
    pub fn carry(&self) -> bool {
        self.contains(Status::CARRY)
    }

    #[inline]
    pub fn set_carry(&mut self, on: bool) {
        self.set(Status::CARRY, on);
    }

    #[inline]
    pub fn zero(&self) -> bool {
        self.contains(Status::ZERO)
    }

    #[inline]
    pub fn set_zero(&mut self, on: bool) {
        self.set(Status::ZERO, on);
    }

    #[inline]
    pub fn interrupt_disable(&self) -> bool {
        self.contains(Status::INTERRUPT_DISABLE)
    }

    #[inline]
    pub fn set_interrupt_disable(&mut self, on: bool) {
        self.set(Status::INTERRUPT_DISABLE, on);
    }

    #[inline]
    pub fn decimal(&self) -> bool {
        self.contains(Status::DECIMAL)
    }

    #[inline]
    pub fn set_decimal(&mut self, on: bool) {
        self.set(Status::DECIMAL, on);
    }

    #[inline]
    pub fn break_flag(&self) -> bool {
        self.contains(Status::BREAK)
    }

    #[inline]
    pub fn set_break_flag(&mut self, on: bool) {
        self.set(Status::BREAK, on);
    }

    #[inline]
    pub fn overflow(&self) -> bool {
        self.contains(Status::OVERFLOW)
    }

    #[inline]
    pub fn set_overflow(&mut self, on: bool) {
        self.set(Status::OVERFLOW, on);
    }

    #[inline]
    pub fn negative(&self) -> bool {
        self.contains(Status::NEGATIVE)
    }

    #[inline]
    pub fn set_negative(&mut self, on: bool) {
        self.set(Status::NEGATIVE, on);
    }

    /// Set Zero and Negative from a result byte: Z iff zero, N from bit 7.
    #[inline]
    pub fn update_zn(&mut self, value: u8) {
        self.set_zero(value == 0);
        self.set_negative(value & 0x80 != 0);
    }
}
