use chrono::NaiveDate;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, NormalError};
use rand_pcg::Pcg64;

use crate::boiler::fuel_switch::MAX_ANNUAL_HOURS;

/// 시계열 길이 [일]. 윤년은 다루지 않는다.
pub const SERIES_DAYS: usize = 365;

/// 시계열 고정 시작일 (2023-01-01).
const SERIES_START: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// 일일 운전시간 샘플러 입력.
#[derive(Debug, Clone)]
pub struct OperatingHoursInput {
    /// 연간 운전시간 [h/yr]
    pub annual_operating_hours: f64,
    /// 난수 시드. None이면 OS 엔트로피를 사용한다.
    pub seed: Option<u64>,
}

/// 하루치 샘플.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyOperatingHours {
    /// 달력 날짜
    pub date: NaiveDate,
    /// 샘플링된 운전시간 [h]
    pub hours: f64,
}

/// 샘플러 오류.
#[derive(Debug)]
pub enum SamplerError {
    /// 연간 운전시간 범위 (0, 8760] 위반
    HoursOutOfRange(f64),
    /// 정규분포 생성 실패
    Distribution(NormalError),
}

impl std::fmt::Display for SamplerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplerError::HoursOutOfRange(hours) => {
                write!(f, "연간 운전시간은 0 초과 8760 이하이어야 합니다: {hours}")
            }
            SamplerError::Distribution(e) => write!(f, "정규분포 생성 오류: {e}"),
        }
    }
}

impl std::error::Error for SamplerError {}

impl From<NormalError> for SamplerError {
    fn from(value: NormalError) -> Self {
        SamplerError::Distribution(value)
    }
}

/// 연간 운전시간을 일평균 중심의 정규분포 노이즈로 펼친 365일 시계열을 생성한다.
///
/// 평균은 연간값/365, 표준편차는 평균의 10%이다. 시각화용 합성 데이터라서
/// 샘플 합계가 연간값과 일치한다는 보장은 없으며, 분석 계산에는 쓰이지 않는다.
pub fn sample_daily_operating_hours(
    input: &OperatingHoursInput,
) -> Result<Vec<DailyOperatingHours>, SamplerError> {
    if input.annual_operating_hours <= 0.0 || input.annual_operating_hours > MAX_ANNUAL_HOURS {
        return Err(SamplerError::HoursOutOfRange(input.annual_operating_hours));
    }
    let daily_mean = input.annual_operating_hours / SERIES_DAYS as f64;
    let normal = Normal::new(daily_mean, daily_mean * 0.1)?;
    let mut rng = match input.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_os_rng(),
    };
    Ok(SERIES_START
        .iter_days()
        .take(SERIES_DAYS)
        .map(|date| DailyOperatingHours {
            date,
            hours: normal.sample(&mut rng),
        })
        .collect())
}
