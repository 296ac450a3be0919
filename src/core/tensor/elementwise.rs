use crate::core::formats::FloatFormat;
use crate::core::rounding::StochasticAdder;
use anyhow::Result;
use ndarray::{ArrayD, IxDyn};
use rayon::prelude::*;

/// NumPy 규칙으로 두 shape의 브로드캐스트 결과 shape을 계산한다
///
/// 뒤쪽 차원부터 정렬해 각 차원이 같거나 한쪽이 1이어야 한다.
/// 호환되지 않으면 오류다. 코어 알고리즘은 shape이 안 맞는 입력을
/// 받는 일이 없다.
pub fn broadcast_shape(a: &[usize], b: &[usize]) -> Result<Vec<usize>> {
    let ndim = a.len().max(b.len());
    let mut shape = vec![0usize; ndim];
    for i in 0..ndim {
        let da = if i < ndim - a.len() { 1 } else { a[i - (ndim - a.len())] };
        let db = if i < ndim - b.len() { 1 } else { b[i - (ndim - b.len())] };
        shape[i] = if da == db || db == 1 {
            da
        } else if da == 1 {
            db
        } else {
            return Err(anyhow::anyhow!(
                "브로드캐스트 불가능한 shape: {:?} vs {:?}",
                a,
                b
            ));
        };
    }
    Ok(shape)
}

/// 브로드캐스트된 행우선(row-major) 순서의 원소 버퍼를 만든다
fn broadcast_to_vec<T: FloatFormat>(x: &ArrayD<T>, shape: &[usize]) -> Result<Vec<T>> {
    let view = x.broadcast(IxDyn(shape)).ok_or_else(|| {
        anyhow::anyhow!("브로드캐스트 불가능한 shape: {:?} → {:?}", x.shape(), shape)
    })?;
    Ok(view.iter().copied().collect())
}

impl<T: FloatFormat> StochasticAdder<T> {
    /// 배열 확률적 반올림 덧셈 (브로드캐스팅 지원)
    ///
    /// 각 원소는 (두 피연산자 비트, 행우선 선형 인덱스, 시드)만으로
    /// 계산되므로 병렬 단위나 평가 순서와 무관하게 비트 단위로 동일한
    /// 결과가 나온다.
    pub fn add(&self, x: &ArrayD<T>, y: &ArrayD<T>, is_biased: bool) -> Result<ArrayD<T>> {
        let shape = broadcast_shape(x.shape(), y.shape())?;
        let xs = broadcast_to_vec(x, &shape)?;
        let ys = broadcast_to_vec(y, &shape)?;
        let out: Vec<T> = (0..xs.len())
            .into_par_iter()
            .map(|i| self.add_scalar(xs[i], ys[i], i as u64, is_biased))
            .collect();
        Ok(ArrayD::from_shape_vec(IxDyn(&shape), out)?)
    }

    /// 편향 모드 배열 덧셈 (바인딩된 가산기 편의 표면)
    pub fn add_biased(&self, x: &ArrayD<T>, y: &ArrayD<T>) -> Result<ArrayD<T>> {
        self.add(x, y, true)
    }

    /// 고정밀 피연산자와의 배열 덧셈
    ///
    /// y의 여분 가수 비트는 마지막 반올림 단계까지 보존된다.
    /// H는 엄격히 더 넓은 포맷이어야 하고, 아니면 구성 오류다.
    pub fn add_highprecision<H: FloatFormat>(
        &self,
        x: &ArrayD<T>,
        y: &ArrayD<H>,
        is_biased: bool,
    ) -> Result<ArrayD<T>> {
        if H::BITS <= T::BITS {
            return Err(anyhow::anyhow!(
                "add_highprecision은 더 높은 정밀도의 y가 필요함: {} <= {}",
                H::PRECISION.name(),
                T::PRECISION.name()
            ));
        }
        let shape = broadcast_shape(x.shape(), y.shape())?;
        let xs = broadcast_to_vec(x, &shape)?;
        let ys = broadcast_to_vec(y, &shape)?;
        let out: Vec<T> = (0..xs.len())
            .into_par_iter()
            .map(|i| self.add_scalar_highprecision(xs[i], ys[i], i as u64, is_biased))
            .collect();
        Ok(ArrayD::from_shape_vec(IxDyn(&shape), out)?)
    }

    /// x + value * t1 / t2의 배열 버전
    ///
    /// 나눗셈과 스케일링은 f64에서 수행되고, 확률적 반올림은 최종 합에만
    /// 작용한다. 16비트 이하 포맷에서는 연산을 따로 수행하는 것보다 훨씬
    /// 정밀하다.
    pub fn addcdiv(
        &self,
        x: &ArrayD<T>,
        t1: &ArrayD<T>,
        t2: &ArrayD<T>,
        value: f64,
        is_biased: bool,
    ) -> Result<ArrayD<T>> {
        let quot_shape = broadcast_shape(t1.shape(), t2.shape())?;
        let shape = broadcast_shape(x.shape(), &quot_shape)?;
        let xs = broadcast_to_vec(x, &shape)?;
        let t1s = broadcast_to_vec(t1, &shape)?;
        let t2s = broadcast_to_vec(t2, &shape)?;
        let out: Vec<T> = (0..xs.len())
            .into_par_iter()
            .map(|i| self.addcdiv_scalar(xs[i], t1s[i], t2s[i], value, i as u64, is_biased))
            .collect();
        Ok(ArrayD::from_shape_vec(IxDyn(&shape), out)?)
    }
}
