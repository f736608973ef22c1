use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::ParseError;

/// Fixed-point decimal with 7 decimal places and 11 integer digits.
///
/// Range: ±99,999,999,999.9999999
/// Precision: 0.0000001
///
/// The value is stored as an `i64` scaled by 10^7. One bit pattern outside
/// the numeric range (`i64::MIN`) is reserved for the `NaN` sentinel, which
/// arises from arithmetic overflow, division by zero, non-finite float
/// input, or the literal `"NaN"`, and which propagates through every
/// operation. Check [`Fixed::is_nan`] at the point a result is consumed.
///
/// Comparisons operate on the scaled representation: `NAN` equals itself
/// and orders below every numeric value, and comparing never panics.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fixed {
    fp: i64,
}

// ============================================================================
// Constants
// ============================================================================

impl Fixed {
    /// The scale factor: 10^7
    pub const SCALE: i64 = 10_000_000;

    /// The number of decimal places
    pub const PLACES: u32 = 7;

    /// Largest representable value: 99,999,999,999.9999999
    pub const MAX: Self = Self { fp: MAX_FP };

    /// Smallest representable value: -99,999,999,999.9999999
    pub const MIN: Self = Self { fp: -MAX_FP };

    /// Zero
    pub const ZERO: Self = Self { fp: 0 };

    /// One (1.0)
    pub const ONE: Self = Self { fp: Self::SCALE };

    /// The not-a-number sentinel
    pub const NAN: Self = Self { fp: NAN_FP };
}

/// Upper bound of the scaled representation: 10^18 - 1, i.e. 11 integer
/// digits and 7 fractional digits.
const MAX_FP: i64 = 999_999_999_999_999_999;

/// Largest integer part that fits in 11 digits.
const MAX_INT: i64 = 99_999_999_999;

/// Reserved bit pattern for NaN, outside the ±MAX_FP numeric range.
const NAN_FP: i64 = i64::MIN;

/// Float magnitude at or above which a conversion no longer fits.
const MAX_F64: f64 = 99_999_999_999.999_999_9;

// ============================================================================
// Constructors and Raw Access
// ============================================================================

impl Default for Fixed {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Fixed {
    /// Creates a `Fixed` from a raw scaled value.
    ///
    /// The caller must ensure the value is scaled by 10^7 and within
    /// ±999,999,999,999,999,999, or is the `i64::MIN` NaN sentinel.
    #[inline(always)]
    pub const fn from_raw(fp: i64) -> Self {
        Self { fp }
    }

    /// Returns the raw internal value (scaled by 10^7).
    #[inline(always)]
    pub const fn to_raw(self) -> i64 {
        self.fp
    }

    /// Creates a `Fixed` equal to `mantissa / 10^exponent`.
    ///
    /// Digits beyond the 7th decimal place are truncated, not rounded,
    /// matching the parser. A result outside the 11-integer-digit range
    /// is [`Fixed::NAN`].
    ///
    /// ```rust
    /// use decfix::Fixed;
    ///
    /// assert_eq!(Fixed::from_scaled(12345, 2).to_string(), "123.45");
    /// assert_eq!(Fixed::from_scaled(123456789012, 9).to_string(), "123.456789");
    /// ```
    pub const fn from_scaled(mantissa: i64, exponent: u32) -> Self {
        let mut m = mantissa;
        let mut e = exponent;
        if e > Self::PLACES {
            let drop = e - Self::PLACES;
            if drop > 18 {
                m = 0;
            } else {
                m /= pow10(drop);
            }
            e = Self::PLACES;
        }
        match m.checked_mul(pow10(Self::PLACES - e)) {
            Some(fp) => Self::in_range(fp),
            None => Self::NAN,
        }
    }

    /// Creates a `Fixed` from an integer value, or [`Fixed::NAN`] if it
    /// exceeds 11 digits.
    #[inline]
    pub const fn from_i64(value: i64) -> Self {
        match value.checked_mul(Self::SCALE) {
            Some(fp) => Self::in_range(fp),
            None => Self::NAN,
        }
    }

    /// Maps a scaled value to a `Fixed`, collapsing out-of-range
    /// magnitudes to the sentinel.
    #[inline(always)]
    const fn in_range(fp: i64) -> Self {
        if fp > MAX_FP || fp < -MAX_FP {
            Self::NAN
        } else {
            Self { fp }
        }
    }

    /// Same as [`Fixed::in_range`] for wide intermediates.
    #[inline(always)]
    const fn in_range_wide(fp: i128) -> Self {
        if fp > MAX_FP as i128 || fp < -(MAX_FP as i128) {
            Self::NAN
        } else {
            Self { fp: fp as i64 }
        }
    }
}

// ============================================================================
// Float Conversions
// ============================================================================

impl Fixed {
    /// Creates a `Fixed` from an `f64`, rounding to the nearest 7-decimal
    /// value.
    ///
    /// Binary floating point cannot represent most decimal fractions
    /// exactly, so the scaled value is biased by half a unit in the last
    /// place before truncation. Without that, `0.1` (stored as
    /// 0.1000000000000000055...) would survive but `0.3` (stored as
    /// 0.2999999999999999888...) would lose its last digit.
    ///
    /// NaN, infinite, and out-of-range inputs are [`Fixed::NAN`].
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::NAN;
        }
        if value >= MAX_F64 || value <= -MAX_F64 {
            return Self::NAN;
        }
        let bias = if value < 0.0 { -0.5 } else { 0.5 };
        Self {
            fp: (value * Self::SCALE as f64 + bias) as i64,
        }
    }

    /// Converts to `f64`. `NaN` converts to `f64::NAN`.
    ///
    /// Integer and fractional parts are converted separately so values
    /// with large integer parts keep their fraction exact.
    #[inline]
    pub fn to_f64(self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        (self.fp / Self::SCALE) as f64 + (self.fp % Self::SCALE) as f64 / Self::SCALE as f64
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Fixed {
    /// Adds two values. Overflow of the representable range is
    /// [`Fixed::NAN`], as is any `NaN` operand.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn add(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::NAN;
        }
        // Valid operands are below 10^18 in magnitude, so the i64 sum
        // cannot wrap; it can only leave the numeric range.
        Self::in_range(self.fp + rhs.fp)
    }

    /// Subtracts `rhs` from `self`, with the same NaN rules as
    /// [`Fixed::add`].
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn sub(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::NAN;
        }
        Self::in_range(self.fp - rhs.fp)
    }

    /// Multiplies two values.
    ///
    /// The exact product of the scaled values is computed in 128 bits,
    /// rescaled by 10^7 rounding to nearest with ties away from zero, and
    /// range-checked. Overflow and `NaN` operands are [`Fixed::NAN`].
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn mul(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::NAN;
        }
        let product = self.fp as i128 * rhs.fp as i128;
        Self::in_range_wide(div_round(product, Self::SCALE as i128))
    }

    /// Divides `self` by `rhs`.
    ///
    /// The quotient is computed as `(self * 10^7) / rhs` in 128 bits,
    /// rounded to nearest with ties away from zero. Division by zero,
    /// overflow, and `NaN` operands are [`Fixed::NAN`].
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn div(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() || rhs.fp == 0 {
            return Self::NAN;
        }
        let numerator = self.fp as i128 * Self::SCALE as i128;
        Self::in_range_wide(div_round(numerator, rhs.fp as i128))
    }
}

// ============================================================================
// Rounding Operations
// ============================================================================

impl Fixed {
    /// Rounds to `places` decimal places, half away from zero.
    ///
    /// `places >= 7` returns the value unchanged; nothing beyond 7 digits
    /// is stored. `NaN` stays `NaN`.
    ///
    /// ```rust
    /// use decfix::Fixed;
    ///
    /// assert_eq!(Fixed::must_parse("2234.565").round(2).to_string(), "2234.57");
    /// assert_eq!(Fixed::must_parse("-1.12345").round(4).to_string(), "-1.1235");
    /// ```
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn round(self, places: u32) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if places >= Self::PLACES {
            return self;
        }
        let step = pow10(Self::PLACES - places) as i128;
        Self::in_range_wide(div_round(self.fp as i128, step) * step)
    }

    /// Rounds toward negative infinity at `places` decimal places.
    ///
    /// Distinct from truncation for negative values: `-1.12` floors to
    /// `-1.2` at one place, not `-1.1`.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn floor(self, places: u32) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if places >= Self::PLACES {
            return self;
        }
        let step = pow10(Self::PLACES - places);
        Self::in_range(self.fp.div_euclid(step) * step)
    }

    /// Rounds toward positive infinity at `places` decimal places.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn ceil(self, places: u32) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if places >= Self::PLACES {
            return self;
        }
        let step = pow10(Self::PLACES - places);
        Self::in_range(-((-self.fp).div_euclid(step)) * step)
    }
}

// ============================================================================
// Decomposition and Predicates
// ============================================================================

impl Fixed {
    /// Returns the integer portion, truncated toward zero. `NaN` is 0.
    #[inline(always)]
    pub const fn int_part(self) -> i64 {
        if self.is_nan() {
            return 0;
        }
        self.fp / Self::SCALE
    }

    /// Returns the fractional portion as an `f64`, carrying the sign of
    /// the value. `NaN` is `f64::NAN`.
    #[inline]
    pub fn frac(self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        (self.fp % Self::SCALE) as f64 / Self::SCALE as f64
    }

    /// Returns -1, 0, or +1 for negative, zero, and positive values.
    /// `NaN` is 0.
    #[inline(always)]
    pub const fn sign(self) -> i32 {
        if self.is_nan() || self.fp == 0 {
            0
        } else if self.fp < 0 {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value. `NaN` stays `NaN`.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn abs(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        Self {
            fp: self.fp.abs(),
        }
    }

    /// Returns `true` for the `NaN` sentinel.
    #[inline(always)]
    pub const fn is_nan(self) -> bool {
        self.fp == NAN_FP
    }

    /// Returns `true` if `self` is zero.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.fp == 0
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Fixed {
    type Err = ParseError;

    /// Parses a decimal literal: an optional leading `-`, then either the
    /// literal `NaN` or digits with an optional fraction (`123`, `123.45`,
    /// `.5`, `-0.001`).
    ///
    /// Fractional digits beyond the 7th are truncated, not rounded, so
    /// re-parsing a truncated literal is stable. An integer part beyond 11
    /// digits is not a syntax error; it parses to [`Fixed::NAN`].
    fn from_str(s: &str) -> crate::Result<Self> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if body == "NaN" {
            return Ok(Self::NAN);
        }

        let bytes = body.as_bytes();
        let point = bytes.iter().position(|&b| b == b'.');
        let (int_digits, frac_digits) = match point {
            Some(i) => (&bytes[..i], &bytes[i + 1..]),
            None => (bytes, &[][..]),
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(ParseError::MissingDigits);
        }
        if point.is_some() && frac_digits.is_empty() {
            return Err(ParseError::MissingDigits);
        }

        // Accumulation stops once the integer part is known to be out of
        // range, but the remaining characters are still validated so a
        // malformed huge literal is a syntax error, not NaN.
        let mut int_part = 0i64;
        let mut too_large = false;
        for &b in int_digits {
            let digit = b.wrapping_sub(b'0');
            if digit > 9 {
                return Err(ParseError::InvalidCharacter);
            }
            if !too_large {
                int_part = int_part * 10 + digit as i64;
                if int_part > MAX_INT {
                    too_large = true;
                }
            }
        }

        let mut frac = 0i64;
        let mut kept = 0u32;
        for &b in frac_digits {
            let digit = b.wrapping_sub(b'0');
            if digit > 9 {
                return Err(ParseError::InvalidCharacter);
            }
            if kept < Self::PLACES {
                frac = frac * 10 + digit as i64;
                kept += 1;
            }
        }

        if too_large {
            return Ok(Self::NAN);
        }

        let fp = int_part * Self::SCALE + frac * pow10(Self::PLACES - kept);
        Ok(Self {
            fp: if negative { -fp } else { fp },
        })
    }
}

impl Fixed {
    /// Parses a decimal literal, panicking if it is malformed.
    ///
    /// Intended for literals known at authorship time to be valid; use
    /// [`str::parse`] for anything else.
    ///
    /// # Panics
    ///
    /// Panics on a syntax error. An out-of-range literal does not panic;
    /// it yields [`Fixed::NAN`] like the fallible parser.
    pub fn must_parse(s: &str) -> Self {
        match s.parse() {
            Ok(value) => value,
            Err(err) => panic!("invalid fixed-point literal {s:?}: {err}"),
        }
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl fmt::Display for Fixed {
    /// Formats the value in its canonical text form.
    ///
    /// `NaN` formats as the literal `NaN`. Otherwise trailing fractional
    /// zeros are stripped, and a whole number carries no decimal point.
    /// A precision (`{:.2}`) selects exactly that many fractional digits,
    /// truncating (never rounding) when narrowing and zero-padding when
    /// widening, so `format!("{:.2}", f)` matches the parser's
    /// truncation policy.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }

        if let Some(places) = f.precision() {
            return self.fmt_padded(f, places);
        }

        let abs = self.fp.unsigned_abs();
        let int_part = abs / Self::SCALE as u64;
        let mut frac = abs % Self::SCALE as u64;

        // Worst case is 20 bytes: sign, 11 integer digits, point, 7
        // fractional digits.
        let mut buf = [0u8; 24];
        let mut pos = 0;

        if self.fp < 0 {
            buf[pos] = b'-';
            pos += 1;
        }

        if int_part == 0 {
            buf[pos] = b'0';
            pos += 1;
        } else {
            let start = pos;
            let mut n = int_part;
            while n > 0 {
                buf[pos] = b'0' + (n % 10) as u8;
                n /= 10;
                pos += 1;
            }
            buf[start..pos].reverse();
        }

        if frac > 0 {
            buf[pos] = b'.';
            pos += 1;

            let mut digits = Self::PLACES as usize;
            while frac % 10 == 0 {
                frac /= 10;
                digits -= 1;
            }

            let end = pos + digits;
            let mut i = end;
            while frac > 0 {
                i -= 1;
                buf[i] = b'0' + (frac % 10) as u8;
                frac /= 10;
            }
            while i > pos {
                i -= 1;
                buf[i] = b'0';
            }
            pos = end;
        }

        f.write_str(core::str::from_utf8(&buf[..pos]).unwrap())
    }
}

impl Fixed {
    // Fixed-width fractional output; not the hot path.
    fn fmt_padded(&self, f: &mut fmt::Formatter<'_>, places: usize) -> fmt::Result {
        let abs = self.fp.unsigned_abs();
        let int_part = abs / Self::SCALE as u64;
        let frac = abs % Self::SCALE as u64;

        if self.fp < 0 {
            f.write_str("-")?;
        }
        write!(f, "{int_part}")?;

        if places == 0 {
            return Ok(());
        }
        f.write_str(".")?;

        if places <= Self::PLACES as usize {
            let shown = frac / pow10((Self::PLACES as usize - places) as u32) as u64;
            write!(f, "{shown:0places$}")
        } else {
            write!(f, "{frac:07}")?;
            for _ in 0..places - Self::PLACES as usize {
                f.write_str("0")?;
            }
            Ok(())
        }
    }

    /// Formats with exactly `places` fractional digits, truncating when
    /// narrowing and zero-padding when widening; `places = 0` emits no
    /// decimal point.
    ///
    /// ```rust
    /// use decfix::Fixed;
    ///
    /// assert_eq!(Fixed::must_parse("1.127").to_string_padded(2), "1.12");
    /// assert_eq!(Fixed::must_parse("1.1").to_string_padded(2), "1.10");
    /// ```
    #[cfg(feature = "alloc")]
    pub fn to_string_padded(&self, places: usize) -> alloc::string::String {
        alloc::format!("{self:.places$}")
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // {:#?} shows the raw scaled value
            f.debug_struct("Fixed").field("fp", &self.fp).finish()
        } else {
            write!(f, "Fixed({self})")
        }
    }
}

// ============================================================================
// Byte and Stream Codecs
// ============================================================================

impl Fixed {
    /// The size of the binary encoding in bytes.
    pub const BYTES: usize = core::mem::size_of::<i64>();

    /// Returns the big-endian binary encoding of the scaled value.
    ///
    /// The byte order is fixed; encodings are portable across machines.
    #[inline(always)]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.fp.to_be_bytes()
    }

    /// Decodes a value from its big-endian binary encoding.
    #[inline(always)]
    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self {
            fp: i64::from_be_bytes(bytes),
        }
    }

    /// Writes the 8-byte big-endian encoding to a stream.
    ///
    /// I/O failures surface as `io::Error`; they are never folded into
    /// the `NaN` sentinel.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.to_be_bytes())
    }

    /// Reads an 8-byte big-endian encoding from a stream.
    #[cfg(feature = "std")]
    pub fn read_from<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let mut buf = [0u8; 8];
        reader.read_exact(&mut buf)?;
        Ok(Self::from_be_bytes(buf))
    }
}

// ============================================================================
// JSON Token Codec
// ============================================================================

impl Fixed {
    /// Encodes the value as a raw JSON token: the canonical text form with
    /// no quotes, including the non-standard `NaN` token for the sentinel.
    #[cfg(feature = "alloc")]
    pub fn to_json_token(&self) -> alloc::string::String {
        alloc::format!("{self}")
    }

    /// Decodes a JSON token produced by [`Fixed::to_json_token`].
    ///
    /// Surrounding whitespace and one optional layer of double quotes are
    /// accepted, so both `12.5` and `"12.5"` decode. The token is then
    /// re-parsed with the same two-channel behavior as [`str::parse`]:
    /// malformed text is a [`ParseError`], an out-of-range literal is
    /// [`Fixed::NAN`].
    pub fn from_json_token(token: &str) -> crate::Result<Self> {
        let token = token.trim();
        let token = token
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or(token);
        token.parse()
    }
}

// ============================================================================
// Operator Trait Implementations
// ============================================================================

impl Add for Fixed {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Fixed::add(self, rhs)
    }
}

impl Sub for Fixed {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Fixed::sub(self, rhs)
    }
}

impl Mul for Fixed {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Fixed::mul(self, rhs)
    }
}

impl Div for Fixed {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Fixed::div(self, rhs)
    }
}

impl Neg for Fixed {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        Self { fp: -self.fp }
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fixed {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Sum for Fixed {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Fixed> for Fixed {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + *x)
    }
}

// ============================================================================
// Conversion Trait Implementations
// ============================================================================

// 32-bit and smaller integers always fit the 11-digit range.

impl From<i32> for Fixed {
    fn from(value: i32) -> Self {
        Self {
            fp: value as i64 * Self::SCALE,
        }
    }
}

impl From<u32> for Fixed {
    fn from(value: u32) -> Self {
        Self {
            fp: value as i64 * Self::SCALE,
        }
    }
}

impl From<i16> for Fixed {
    fn from(value: i16) -> Self {
        Self::from(value as i32)
    }
}

impl From<u16> for Fixed {
    fn from(value: u16) -> Self {
        Self::from(value as u32)
    }
}

impl From<i8> for Fixed {
    fn from(value: i8) -> Self {
        Self::from(value as i32)
    }
}

impl From<u8> for Fixed {
    fn from(value: u8) -> Self {
        Self::from(value as u32)
    }
}

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for Fixed {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            // JSON, TOML, etc. - use the canonical string form
            serializer.collect_str(self)
        } else {
            // Bincode, MessagePack, etc. - serialize the raw scaled i64
            serializer.serialize_i64(self.fp)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Fixed {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = alloc::string::String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        } else {
            let fp = i64::deserialize(deserializer)?;
            Ok(Self { fp })
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 10^n for n in 0..=18.
const fn pow10(n: u32) -> i64 {
    const POW10: [i64; 19] = [
        1,
        10,
        100,
        1_000,
        10_000,
        100_000,
        1_000_000,
        10_000_000,
        100_000_000,
        1_000_000_000,
        10_000_000_000,
        100_000_000_000,
        1_000_000_000_000,
        10_000_000_000_000,
        100_000_000_000_000,
        1_000_000_000_000_000,
        10_000_000_000_000_000,
        100_000_000_000_000_000,
        1_000_000_000_000_000_000,
    ];
    POW10[n as usize]
}

/// Divides rounding to nearest, ties away from zero. `d` must be nonzero.
const fn div_round(n: i128, d: i128) -> i128 {
    let q = n / d;
    let r = n % d;
    if r.unsigned_abs() * 2 >= d.unsigned_abs() {
        if (n < 0) == (d < 0) { q + 1 } else { q - 1 }
    } else {
        q
    }
}
