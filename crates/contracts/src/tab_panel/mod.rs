//! Tab panel model
//!
//! Содержит:
//! - `state` - явное состояние группы (какой таб активен)
//! - `layout` - чистая функция состояние → высоты
//! - `view` - трейт поверхности, на которой рисуется группа
//! - `controller` - переход активации и реестр групп страницы
//! - `config` - селекторы и классы
//! - `error` - ошибки модели

pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod state;
pub mod view;

pub use config::TabPanelConfig;
pub use controller::{SharedGroup, TabGroup, TabPanel};
pub use error::TabPanelError;
pub use layout::{ContentHeight, ItemLayout};
pub use state::{GroupId, TabGroupState};
pub use view::TabGroupView;
