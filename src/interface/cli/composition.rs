//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::{ConfigRepository, FieldPrompter, PersonStore, Reporter};
use crate::application::usecases::add_person::AddPersonUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::list_people::ListPeopleUseCase;
use crate::application::usecases::load_people::LoadPeopleUseCase;
use crate::application::usecases::save_people::SavePeopleUseCase;
use crate::application::usecases::select_people::SelectPeopleUseCase;
use crate::infrastructure::adapters::{
    AsciiTableRenderer, ConsoleReporter, JsonConfigRepository, JsonFilePersonStore, StdinPrompter,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: Box<dyn ConfigRepository>,
    store: Box<dyn PersonStore>,
    prompter: Box<dyn FieldPrompter>,
    reporter: Box<dyn Reporter>,
    renderer: AsciiTableRenderer,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_ports(
            Box::new(JsonConfigRepository),
            Box::new(JsonFilePersonStore),
            Box::new(StdinPrompter),
            Box::new(ConsoleReporter::new()),
        )
    }
}

impl AppComposition {
    /// 포트 구현을 외부에서 주입한다(테스트/라이브러리 호출용).
    pub fn with_ports(
        config_repo: Box<dyn ConfigRepository>,
        store: Box<dyn PersonStore>,
        prompter: Box<dyn FieldPrompter>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            config_repo,
            store,
            prompter,
            reporter,
            renderer: AsciiTableRenderer,
        }
    }

    pub fn load_config(&self) -> Result<Config> {
        self.config_repo.load()
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: self.config_repo.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }

    /// 인물 추가 유스케이스를 생성한다.
    pub fn add_person_usecase(&self) -> AddPersonUseCase<'_> {
        AddPersonUseCase {
            prompter: self.prompter.as_ref(),
        }
    }

    /// 명단 표 출력 유스케이스를 생성한다.
    pub fn list_people_usecase(&self) -> ListPeopleUseCase<'_> {
        ListPeopleUseCase {
            renderer: &self.renderer,
            reporter: self.reporter.as_ref(),
        }
    }

    /// 월별 조회 유스케이스를 생성한다.
    pub fn select_people_usecase(&self) -> SelectPeopleUseCase<'_> {
        SelectPeopleUseCase {
            reporter: self.reporter.as_ref(),
        }
    }

    /// 명단 저장 유스케이스를 생성한다.
    pub fn save_people_usecase(&self) -> SavePeopleUseCase<'_> {
        SavePeopleUseCase {
            store: self.store.as_ref(),
        }
    }

    /// 명단 로딩 유스케이스를 생성한다.
    pub fn load_people_usecase(&self) -> LoadPeopleUseCase<'_> {
        LoadPeopleUseCase {
            store: self.store.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }
}
