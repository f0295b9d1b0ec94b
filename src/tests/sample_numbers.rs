/// Inputs used across tests, named by what they exercise.
pub struct SampleNumbers {}

#[allow(unused)]
impl SampleNumbers {
    pub fn mobile_international() -> &'static str {
        "+386 (0)31 123 456"
    }

    pub fn mobile_slashed() -> &'static str {
        "031/123-456"
    }

    pub fn mobile_idd_compact() -> &'static str {
        "00386311234 56"
    }

    pub fn mobile_without_plus() -> &'static str {
        "386 41 234 567"
    }

    pub fn mobile_display() -> &'static str {
        "+386 (0)41 234 567"
    }

    pub fn fixed_national() -> &'static str {
        "01 234 5678"
    }

    pub fn fixed_international() -> &'static str {
        "+386 1 234 5678"
    }

    pub fn fixed_dashed() -> &'static str {
        "04 20-12-345"
    }

    pub fn too_short() -> &'static str {
        "031 123 45"
    }

    pub fn garbage() -> &'static str {
        "call me maybe"
    }
}
