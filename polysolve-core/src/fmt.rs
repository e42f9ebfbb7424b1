use num_complex::Complex64;

use crate::roots::Roots;

pub trait Fmt {
    fn s(&self, n: usize) -> String;
}

impl Fmt for f64 {
    fn s(&self, n: usize) -> String {
        let rendered = format!("{:.1$}", self, n);
        format!("{}{}", if rendered.starts_with('-') { "" } else { " " }, rendered)
    }
}

impl Fmt for Complex64 {
    fn s(&self, n: usize) -> String {
        let im = format!("{:.1$}", self.im.abs(), n);
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        format!("{} {} {}i", self.re.s(n), sign, im)
    }
}

impl Fmt for Roots {
    fn s(&self, n: usize) -> String {
        format!("[{}]", self.iter().map(|r| r.s(n)).collect::<Vec<String>>().join(", "))
    }
}
