use crate::core::formats::Precision;
use serde::{Deserialize, Serialize};

/// 가산기 전체 구성
///
/// 생성 시점에 한 번 결정되고 이후 절대 변경되지 않는다. 가변 상태가
/// 없으므로 임의 개수의 동시 호출이 잠금 없이 읽기 전용으로 공유할 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdderConfig {
    /// 해시 RNG 시드
    pub seed: u64,
    /// 출력 정밀도 태그
    pub precision: Precision,
}

impl AdderConfig {
    /// 새 구성 생성
    pub fn new(seed: u64, precision: Precision) -> Self {
        Self { seed, precision }
    }

    /// 시드 설정
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// 정밀도 설정
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }
}
