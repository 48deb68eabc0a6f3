pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn au() -> &'static str {
        "AU"
    }

    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn cn() -> &'static str {
        "CN"
    }

    pub fn cw() -> &'static str {
        "CW"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn fr() -> &'static str {
        "FR"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn gg() -> &'static str {
        "GG"
    }

    pub fn r#in() -> &'static str {
        "IN"
    }

    pub fn jm() -> &'static str {
        "JM"
    }

    pub fn jp() -> &'static str {
        "JP"
    }

    pub fn kz() -> &'static str {
        "KZ"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
