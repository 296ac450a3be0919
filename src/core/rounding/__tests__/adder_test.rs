use crate::core::formats::Precision;
use crate::core::rounding::{AdderConfig, StochasticAdder};
use half::{bf16, f16};

#[test]
fn 결정성_테스트() {
    let adder = StochasticAdder::<f32>::with_seed(1234);
    let r1 = adder.add_scalar(1.0, 1e-9, 5, true);
    let r2 = adder.add_scalar(1.0, 1e-9, 5, true);
    assert_eq!(r1.to_bits(), r2.to_bits(), "같은 (시드, 비트, 인덱스)는 같은 결과");
}

#[test]
fn 정확한_합은_섭동되지_않음_테스트() {
    // 1.0 + 1.0 = 2.0은 정확히 표현되므로 어떤 시드, 어떤 모드로도 불변
    for seed in 0..1000 {
        let adder = StochasticAdder::<f32>::with_seed(seed);
        assert_eq!(adder.add_scalar(1.0, 1.0, 0, true), 2.0);
        assert_eq!(adder.add_scalar(1.0, 1.0, 0, false), 2.0);
    }
}

#[test]
fn 편향_모드_빈도_테스트() {
    // bf16에서 1.0 + 절반 ULP: p = 0.5로 위쪽 이웃이 나와야 함
    let a = bf16::from_f64(1.0);
    let b = bf16::from_f64(2f64.powi(-8));
    let upper = 1.0 + 2f64.powi(-7);

    let n = 2_000u64;
    let mut stepped = 0usize;
    for seed in 0..n {
        let adder = StochasticAdder::<bf16>::with_seed(seed);
        let r = adder.add_scalar(a, b, 0, true);
        if r.to_f64() == upper {
            stepped += 1;
        } else {
            assert_eq!(r.to_f64(), 1.0, "결과는 두 이웃 중 하나여야 함");
        }
    }

    let frac = stepped as f64 / n as f64;
    assert!((frac - 0.5).abs() < 0.05, "상향 반올림 빈도: {}", frac);
}

#[test]
fn 비유한_피연산자_단락_테스트() {
    let adder = StochasticAdder::<f32>::with_seed(7);
    assert!(adder.add_scalar(f32::INFINITY, 1.0, 0, true).is_infinite());
    assert!(adder.add_scalar(f32::NAN, 1.0, 0, false).is_nan());
    // 오버플로한 합도 반올림 없이 그대로 전파
    assert!(adder.add_scalar(f32::MAX, f32::MAX, 0, true).is_infinite());
}

#[test]
fn 구성_정밀도_불일치_테스트() {
    let config = AdderConfig::new(42, Precision::Half);

    let mismatch = StochasticAdder::<f32>::from_config(config);
    assert!(mismatch.is_err(), "정밀도 태그 불일치는 생성 시점의 구성 오류");

    let ok = StochasticAdder::<f16>::from_config(config);
    assert!(ok.is_ok());
    assert_eq!(ok.unwrap().config.seed, 42);
}

#[test]
fn 고정밀_경로_기본_테스트() {
    let adder = StochasticAdder::<bf16>::with_seed(99);
    let x = bf16::from_f64(1.0);
    // bf16으로 미리 캐스팅하면 표현은 되지만 합에서 절반 ULP로 남는 값
    let y = 2f32.powi(-8);
    let r = adder.add_scalar_highprecision(x, y, 0, true);

    let upper = bf16::from_f64(1.0 + 2f64.powi(-7));
    assert!(r == x || r == upper, "결과는 두 이웃 중 하나: {}", r);
}

#[test]
fn addcdiv_스칼라_경로_동등성_테스트() {
    let adder = StochasticAdder::<bf16>::with_seed(123);
    let x = bf16::from_f64(0.5);
    let t1 = bf16::from_f64(0.25);
    let t2 = bf16::from_f64(3.0);
    let eps = 0.125;

    let direct = adder.addcdiv_scalar(x, t1, t2, eps, 3, true);
    let y = eps * t1.to_f64() / t2.to_f64();
    let via_add = adder.add_scalar_highprecision::<f64>(x, y, 3, true);

    assert_eq!(direct.to_bits(), via_add.to_bits(), "두 경로는 비트 단위로 동일");
}

#[test]
fn f64_addcdiv_경로_테스트() {
    // f64 출력은 상향 정밀도가 없어 TwoSum 경로로 합류한다
    let adder = StochasticAdder::<f64>::with_seed(11);
    let r = adder.addcdiv_scalar(1.0, 1.0, 3.0, 1e-3, 0, true);
    // 1 + 1e-3/3 근방의 이웃 두 값 중 하나
    let exact = 1.0 + 1e-3 / 3.0;
    assert!((r - exact).abs() < 1e-15, "결과가 정확한 합의 1 ULP 이내여야 함: {}", r);
}
