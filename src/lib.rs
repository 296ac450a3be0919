//! # SR (Stochastic Rounding) 텐서 라이브러리
//!
//! 저정밀 포맷으로 신경망을 학습할 때 작은 업데이트가 최근접 반올림에
//! 전부 버려져 파라미터가 정체(stagnation)되는 문제를, 기댓값이 정확한
//! 확률적 반올림 덧셈으로 해결하는 라이브러리

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 부동소수점 포맷 계층
    FloatFormat, Precision,
    // 오차 분해와 이웃값
    two_sum, two_sum_error_highprec, misrounded_neighbor, misrounded_neighbor_f64,
    // 결정적 해시 RNG
    HashRng,
    // 반올림 결정과 가산기
    choose_rounding, AdderConfig, StochasticAdder,
    // 배열 브로드캐스팅
    broadcast_shape,
};

// 편의 타입 별칭들
pub type HalfAdder = StochasticAdder<half::f16>;
pub type BF16Adder = StochasticAdder<half::bf16>;
pub type SingleAdder = StochasticAdder<f32>;
pub type DoubleAdder = StochasticAdder<f64>;
