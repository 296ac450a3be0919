use anyhow::Result;
use serde::{Deserialize, Serialize};

/// 지원하는 부동소수점 표현의 런타임 태그
///
/// 제네릭 코어는 `FloatFormat` 트레잇으로만 동작하고, 이 태그는
/// 구성 직렬화와 생성 시점의 구성 검증에 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    /// IEEE-754 binary16 (가수 11비트)
    Half,
    /// bfloat16, f32의 가수 절단형 (가수 8비트, 정체에 가장 취약)
    BFloat16,
    /// IEEE-754 binary32
    Single,
    /// IEEE-754 binary64
    Double,
}

impl Precision {
    /// 전체 비트 폭
    pub const fn bits(&self) -> u32 {
        match self {
            Precision::Half => 16,
            Precision::BFloat16 => 16,
            Precision::Single => 32,
            Precision::Double => 64,
        }
    }

    /// 가수 정밀도 (암시적 비트 포함)
    pub const fn mantissa_digits(&self) -> u32 {
        match self {
            Precision::Half => 11,
            Precision::BFloat16 => 8,
            Precision::Single => 24,
            Precision::Double => 53,
        }
    }

    /// 표준 이름
    pub const fn name(&self) -> &'static str {
        match self {
            Precision::Half => "f16",
            Precision::BFloat16 => "bf16",
            Precision::Single => "f32",
            Precision::Double => "f64",
        }
    }

    /// 이름으로부터 태그 해석
    ///
    /// 지원하지 않는 포맷은 호출 시점이 아니라 여기서 구성 오류로 보고된다.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "f16" | "half" => Ok(Precision::Half),
            "bf16" | "bfloat16" => Ok(Precision::BFloat16),
            "f32" | "single" => Ok(Precision::Single),
            "f64" | "double" => Ok(Precision::Double),
            _ => Err(anyhow::anyhow!("지원하지 않는 부동소수점 포맷: {}", name)),
        }
    }
}
