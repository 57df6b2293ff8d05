// src/query.rs

//! Motor de consulta das coleções em memória.
//!
//! Toda listagem do painel (quartos, cardápio, reservas, pedidos de serviço)
//! passa por aqui: um filtro com critérios combinados em AND, agregados
//! recalculados a cada chamada e mutações que devolvem uma nova coleção.

use std::fmt;

pub mod aggregate;
pub mod mutation;
pub mod transition;

pub use aggregate::{booking_stats, menu_stats, room_stats, service_stats};
pub use transition::TransitionError;

/// Uma entidade que pode ser filtrada pelo motor.
///
/// `Category` e `Status` são as duas dimensões de filtro por enum. Entidades
/// sem categoria usam `std::convert::Infallible`, o que torna impossível
/// montar um critério de categoria para elas.
pub trait Queryable: Clone {
    type Category: Copy + PartialEq + fmt::Debug;
    type Status: Copy + PartialEq + fmt::Debug;

    fn id(&self) -> &str;

    /// Campos de texto comparados com o termo de busca.
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> Option<Self::Category>;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);
}

/// Conjunto de critérios ativos. `None` significa "sem restrição".
#[derive(Debug, Clone)]
pub struct Criteria<T: Queryable> {
    pub term: Option<String>,
    pub category: Option<T::Category>,
    pub status: Option<T::Status>,
}

impl<T: Queryable> Default for Criteria<T> {
    fn default() -> Self {
        Self {
            term: None,
            category: None,
            status: None,
        }
    }
}

impl<T: Queryable> Criteria<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn category(mut self, category: T::Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn status(mut self, status: T::Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Termo em minúsculas, sem aparar. Só o termo vazio (ou feito apenas de
    /// espaços) vira `None`.
    fn needle(&self) -> Option<String> {
        self.term
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_lowercase)
    }

    fn matches_with<'a>(
        &self,
        item: &'a T,
        fields: &impl Fn(&'a T) -> Vec<&'a str>,
        needle: Option<&str>,
    ) -> bool {
        let matches_search = match needle {
            Some(needle) => fields(item)
                .iter()
                .any(|field| field.to_lowercase().contains(needle)),
            None => true,
        };
        let matches_category = match self.category {
            Some(category) => item.category() == Some(category),
            None => true,
        };
        let matches_status = match self.status {
            Some(status) => item.status() == status,
            None => true,
        };

        matches_search && matches_category && matches_status
    }
}

/// Subsequência (na mesma ordem da entrada) dos itens que satisfazem todos
/// os critérios.
pub fn filter<T: Queryable>(items: &[T], criteria: &Criteria<T>) -> Vec<T> {
    filter_by(items, criteria, |item| item.search_fields())
}

/// Como `filter`, mas o termo é comparado só com os campos devolvidos por
/// `fields`.
pub fn filter_by<'a, T, F>(items: &'a [T], criteria: &Criteria<T>, fields: F) -> Vec<T>
where
    T: Queryable,
    F: Fn(&'a T) -> Vec<&'a str>,
{
    let needle = criteria.needle();
    items
        .iter()
        .filter(|item| criteria.matches_with(*item, &fields, needle.as_deref()))
        .cloned()
        .collect()
}
