use super::config::AdderConfig;
use super::decision::choose_rounding;
use crate::core::formats::FloatFormat;
use crate::core::math::{misrounded_neighbor, misrounded_neighbor_f64, two_sum};
use crate::core::rng::HashRng;
use anyhow::Result;
use std::marker::PhantomData;

/// 확률적 반올림 가산기
///
/// 출력 포맷 T와 시드를 생성 시점에 한 번 묶어 두고, 원소별 덧셈
/// 진입점을 노출한다. 상태 기계가 없고 모든 호출은 명시적 입력만의
/// 순수 함수다. 배열 적용은 `core::tensor` 쪽 구현이 담당한다.
#[derive(Debug, Clone, Copy)]
pub struct StochasticAdder<T: FloatFormat> {
    /// 불변 구성 (시드 + 정밀도 태그)
    pub config: AdderConfig,
    rng: HashRng,
    _format: PhantomData<T>,
}

impl<T: FloatFormat> StochasticAdder<T> {
    /// 엔트로피 시드로 가산기 생성
    ///
    /// 재현 가능한 실행이 필요하면 `with_seed`나 `from_config`를 쓴다.
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    /// 고정 시드로 가산기 생성
    pub fn with_seed(seed: u64) -> Self {
        log::debug!(
            "StochasticAdder 생성: precision={}, seed={:#018x}",
            T::PRECISION.name(),
            seed
        );
        Self {
            config: AdderConfig::new(seed, T::PRECISION),
            rng: HashRng::new(seed),
            _format: PhantomData,
        }
    }

    /// 직렬화된 구성으로 가산기 생성
    ///
    /// 구성의 정밀도 태그가 T와 다르면 호출 시점이 아니라 여기서
    /// 구성 오류로 보고한다.
    pub fn from_config(config: AdderConfig) -> Result<Self> {
        if config.precision != T::PRECISION {
            return Err(anyhow::anyhow!(
                "구성 정밀도 {}가 가산기 포맷 {}와 일치하지 않음",
                config.precision.name(),
                T::PRECISION.name()
            ));
        }
        Ok(Self {
            config,
            rng: HashRng::new(config.seed),
            _format: PhantomData,
        })
    }

    /// 원소별 확률적 반올림 덧셈
    ///
    /// index는 배열 평가에서의 원소 선형 인덱스다 (스칼라 용도라면 0).
    /// 비유한 피연산자는 반올림을 건너뛰고 IEEE 결과를 그대로 돌려준다.
    #[inline]
    pub fn add_scalar(&self, a: T, b: T, index: u64, is_biased: bool) -> T {
        let (hi, lo) = two_sum(a, b);
        if !hi.is_finite() {
            return hi;
        }
        let alt = misrounded_neighbor(hi, lo);
        let u = self.rng.draw(a.to_bits_u64(), b.to_bits_u64(), index);
        choose_rounding(hi, alt, lo.to_f64(), u, is_biased)
    }

    /// 고정밀 피연산자와의 원소별 덧셈
    ///
    /// 저정밀 쪽 a를 고정밀 포맷 H로 무손실 확장해 H에서 더한 뒤,
    /// 마지막 반올림 단계에서만 T로 좁힌다. b를 미리 다운캐스트하면
    /// 반올림 오차가 누적되므로 b의 여분 가수 비트를 끝까지 보존한다.
    #[inline]
    pub fn add_scalar_highprecision<H: FloatFormat>(
        &self,
        a: T,
        b: H,
        index: u64,
        is_biased: bool,
    ) -> T {
        debug_assert!(H::BITS > T::BITS, "b는 엄격히 더 높은 정밀도여야 함");
        let a_high = H::from_f64(a.to_f64());
        let sum_high = a_high + b;
        let hi = T::from_f64(sum_high.to_f64());
        if !hi.is_finite() {
            return hi;
        }
        // hi는 sum_high의 1 ULP 이내라 이 차이는 f64에서 정확하다
        let lo = sum_high.to_f64() - hi.to_f64();
        let alt = misrounded_neighbor_f64(hi, lo);
        let u = self.rng.draw(a.to_bits_u64(), b.to_bits_u64(), index);
        choose_rounding(hi, alt, lo, u, is_biased)
    }

    /// x + value * t1 / t2의 원소별 확률적 반올림
    ///
    /// 나눗셈과 스케일링을 f64에서 끝낸 다음 고정밀 덧셈 경로를 재사용한다.
    /// 반올림은 이미 반올림된 중간값이 아니라 최종 두 항의 합에 작용해야 한다.
    #[inline]
    pub fn addcdiv_scalar(
        &self,
        x: T,
        t1: T,
        t2: T,
        value: f64,
        index: u64,
        is_biased: bool,
    ) -> T {
        let y = value * t1.to_f64() / t2.to_f64();
        if T::BITS < 64 {
            self.add_scalar_highprecision::<f64>(x, y, index, is_biased)
        } else {
            // f64 출력이면 상향 정밀도가 없으므로 TwoSum 경로로 합류
            self.add_scalar(x, T::from_f64(y), index, is_biased)
        }
    }
}
