//! Domain layer
//! 인물/명단 규칙(정렬, 월별 조회, 레코드 판정)을 외부 의존성 없이 표현한다.

pub mod person;
pub mod record;
pub mod roster;
