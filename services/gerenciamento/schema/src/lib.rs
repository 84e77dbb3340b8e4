//! sea-orm entities for the registry tables.

pub mod alunos;
pub mod professores;
pub mod turmas;
