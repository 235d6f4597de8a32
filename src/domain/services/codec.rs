#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;

use anyhow::Result;

use super::schema;
use crate::domain::models::DiffState;
use crate::domain::models::EditorState;
use crate::domain::models::QueryPairs;

/// Translates session state to and from its URL query representation.
///
/// Decoding is total: every field resolves independently to either its
/// decoded value or its default, so a broken or hand-edited link loads an
/// empty document instead of breaking the page.
pub struct QueryCodec {}

impl QueryCodec {
    pub async fn encode_editor(state: &EditorState) -> Result<QueryPairs> {
        let mut query = QueryPairs::default();
        query.push(schema::EDITOR.code.encode(&state.code).await?);
        query.push(schema::EDITOR.lang.encode(state.language));
        query.push(schema::EDITOR.usetransforms.encode(state.use_transforms));

        return Ok(query);
    }

    pub async fn decode_editor(query: &QueryPairs) -> EditorState {
        return EditorState {
            code: schema::EDITOR.code.decode(query).await,
            language: schema::EDITOR.lang.decode(query),
            use_transforms: schema::EDITOR.usetransforms.decode(query),
        };
    }

    pub async fn encode_diff(state: &DiffState) -> Result<QueryPairs> {
        let (codeold, codenew) = tokio::try_join!(
            schema::DIFF.codeold.encode(&state.code_old),
            schema::DIFF.codenew.encode(&state.code_new),
        )?;

        let mut query = QueryPairs::default();
        query.push(codeold);
        query.push(codenew);
        query.push(schema::DIFF.lang.encode(state.language));

        return Ok(query);
    }

    pub async fn decode_diff(query: &QueryPairs) -> DiffState {
        return DiffState {
            code_old: schema::DIFF.codeold.decode(query).await,
            code_new: schema::DIFF.codenew.decode(query).await,
            language: schema::DIFF.lang.decode(query),
        };
    }
}
