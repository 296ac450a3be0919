use crate::core::math::{misrounded_neighbor, misrounded_neighbor_f64, two_sum};

#[test]
fn 오차_부호별_이웃_테스트() {
    let hi = 1.0f32;
    assert!(misrounded_neighbor(hi, 1e-10f32) > hi);
    assert!(misrounded_neighbor(hi, -1e-10f32) < hi);
    assert_eq!(
        misrounded_neighbor(hi, 0.0f32),
        hi,
        "오차가 0이면 대안 후보가 없음"
    );
}

#[test]
fn 이웃은_정확히_1ulp_테스트() {
    // 1.0 + 1e-9는 f32에서 1.0으로 내림 반올림되고 오차는 양수
    let (hi, lo) = two_sum(1.0f32, 1e-9f32);
    assert_eq!(hi, 1.0);
    assert!(lo > 0.0);

    let alt = misrounded_neighbor(hi, lo);
    assert_eq!(alt.to_bits(), hi.to_bits() + 1, "오차 방향의 바로 다음 표현값");
}

#[test]
fn f64_오차_입력_테스트() {
    let alt = misrounded_neighbor_f64(1.0f32, 2f64.powi(-30));
    assert_eq!(alt.to_bits(), 1.0f32.to_bits() + 1);
    assert_eq!(misrounded_neighbor_f64(1.0f32, 0.0), 1.0f32);
}
